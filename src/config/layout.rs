// src/config/layout.rs
//! 画面 (index.html) に関する定数を定義するよ！
//! 要素の id やメッセージの色など。

// --- 要素の id ---
pub const TARGET_CARD_ID: &str = "target-card"; // ターゲットカード
pub const HAND_AREA_ID: &str = "hand-area"; // 手札エリア
pub const SCORE_DISPLAY_ID: &str = "score-display"; // スコア表示
pub const MESSAGE_DISPLAY_ID: &str = "message-display"; // メッセージ欄
pub const FORMULA_INPUT_ID: &str = "formula-input"; // 式の入力欄
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub const PASS_BUTTON_ID: &str = "pass-btn";

// --- 手札エリア ---
pub const HAND_AREA_HEADING: &str = "<h2>Your Hand</h2>"; // 描画のたびにこれで中身をリセット
pub const CARD_CLASS_NAME: &str = "card";

// --- メッセージの色 ---
pub const MESSAGE_COLOR_NORMAL: &str = "#ffc"; // 黄色っぽい白
pub const MESSAGE_COLOR_SUCCESS: &str = "#a0ffa0"; // 薄い緑
pub const MESSAGE_COLOR_ERROR: &str = "#ff8a8a"; // 薄い赤
