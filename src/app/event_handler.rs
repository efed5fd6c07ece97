// src/app/event_handler.rs
//! ボタンやキー入力から呼ばれる、ブラウザ側のアクション処理。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, warn};

use crate::app::renderer::DomRenderer;
use crate::app::round_timer::{self, TimerSlot};
use crate::app::session::GameSession;

/// ブラウザで動いているセッション。
pub type BrowserSession = GameSession<DomRenderer>;

/// Mutex をロックする。前の処理がパニックして poisoned になっていても中身を取り出して続行するよ。
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Mutex was poisoned! Attempting recovery.");
            poisoned.into_inner()
        }
    }
}

/// 入力欄の式を提出する (Submit ボタン / Enter キー)。
pub(crate) fn handle_submit_from_input(session_arc: &Arc<Mutex<BrowserSession>>, timer_slot: &TimerSlot) {
    let formula = lock_or_recover(session_arc).renderer().formula_text();
    handle_submit(session_arc, timer_slot, &formula);
}

/// 式を提出して、正解なら次のラウンドのタイマーを仕掛ける。
pub(crate) fn handle_submit(session_arc: &Arc<Mutex<BrowserSession>>, timer_slot: &TimerSlot, formula: &str) {
    // セッションのロックはタイマーを仕掛ける前に手放す
    let delay = lock_or_recover(session_arc).submit(formula);

    if let Some(delay_ms) = delay {
        if let Err(e) = round_timer::schedule_next_round(session_arc, timer_slot, delay_ms) {
            error!("Failed to schedule next round: {:?}. Dealing immediately.", e);
            lock_or_recover(session_arc).next_round();
        }
    }
}

/// パス (Pass ボタン)。
pub(crate) fn handle_pass(session_arc: &Arc<Mutex<BrowserSession>>) {
    lock_or_recover(session_arc).pass();
}
