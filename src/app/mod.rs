// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod browser_event_manager;
pub mod event_handler;
pub mod game_app;
pub mod mathjs_evaluator;
pub mod renderer;
pub mod round_timer;
pub mod session;
pub mod state_getter;

pub use game_app::GameApp;
pub use renderer::{MessageKind, Renderer};
pub use session::GameSession;
