// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{window, Document};

use crate::app::browser_event_manager::{self, ClosureStore};
use crate::app::event_handler::{self, lock_or_recover, BrowserSession};
use crate::app::mathjs_evaluator::MathJsEvaluator;
use crate::app::renderer::DomRenderer;
use crate::app::round_timer::TimerSlot;
use crate::app::session::GameSession;
use crate::app::state_getter;
use crate::config::rules::GameConfig;
use crate::logic::evaluator::ArithmeticEvaluator;
use crate::logic::round::RoundState;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// JS からはこれを `new GameApp()` して `start()` するだけ！
#[wasm_bindgen]
pub struct GameApp {
    document: Document,
    session: Arc<Mutex<BrowserSession>>,
    // 次のラウンドのタイマー (予約は常に1つだけ)
    next_round_timer: TimerSlot,
    // イベントリスナーのクロージャを保持する Vec。
    // ここで持っておかないと、クロージャが drop されてリスナーが動かなくなる！
    event_closures: ClosureStore,
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定でゲームを作る。index.html の要素が揃っていなければエラー。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GameApp, JsValue> {
        Self::build(GameConfig::default())
    }

    /// JSON で設定を渡してゲームを作る。書いていない項目はデフォルトのまま。
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Self::build(config)
    }

    /// 式の計算をページの math.js に任せる。
    #[wasm_bindgen]
    pub fn use_mathjs(&self) {
        info!("GameApp: Switching evaluator to math.js");
        lock_or_recover(&self.session).set_evaluator(Box::new(MathJsEvaluator));
    }

    /// リスナーを付けて、最初のラウンドを配る。
    #[wasm_bindgen]
    pub fn start(&self) -> Result<(), JsValue> {
        browser_event_manager::attach_game_listeners(
            &self.document,
            &self.session,
            &self.next_round_timer,
            &self.event_closures,
        )?;
        lock_or_recover(&self.session).start();
        Ok(())
    }

    /// JS から直接式を提出する (入力欄を使わない場合)。
    #[wasm_bindgen]
    pub fn submit(&self, formula: &str) {
        event_handler::handle_submit(&self.session, &self.next_round_timer, formula);
    }

    #[wasm_bindgen]
    pub fn pass(&self) {
        event_handler::handle_pass(&self.session);
    }

    #[wasm_bindgen]
    pub fn score(&self) -> u32 {
        lock_or_recover(&self.session).state().score()
    }

    /// 今のラウンドの状態を JSON 文字列で取得するよ！デバッグ用。
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.session)
    }
}

impl GameApp {
    fn build(config: GameConfig) -> Result<GameApp, JsValue> {
        info!("GameApp: Initializing...");
        let document = window()
            .and_then(|w| w.document())
            .ok_or("Failed to get document")?;

        let renderer = DomRenderer::from_document(document.clone())?;
        let state = RoundState::new(config);
        let session = GameSession::new(state, renderer, Box::new(ArithmeticEvaluator));

        info!("GameApp: Initialization complete.");
        Ok(Self {
            document,
            session: Arc::new(Mutex::new(session)),
            next_round_timer: Arc::new(Mutex::new(None)),
            event_closures: Arc::new(Mutex::new(Vec::new())),
        })
    }
}
