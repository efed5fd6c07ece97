// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // ブラウザ (DOM) とのやり取り
pub mod components; // カードなどのデータ
pub mod config; // 定数と設定
pub mod error;
pub mod logging;
pub mod logic; // ゲームのルール
pub mod protocol; // JS に渡すデータの形

#[cfg(test)]
mod test_support;

pub use app::GameApp;
pub use error::{EvalError, GameError};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("Panic hook set!");
}
