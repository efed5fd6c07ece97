// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// ゲームのデータ部品 (カード、ラウンドの状態) だけを置く場所。ロジックは logic の方！
pub mod card;
pub mod game_state;

pub use card::{Card, Rank, Suit};
pub use game_state::RoundPhase;
