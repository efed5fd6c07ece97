// src/app/round_timer.rs
//! 正解してから次のラウンドを配るまでの `setTimeout` を管理するよ。
//!
//! 予約は常に1つだけ。新しく予約する時は、古い予約をキャンセルしてから置き換える。

use std::sync::{Arc, Mutex};

use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::event_handler::{lock_or_recover, BrowserSession};

/// 予約中のタイマー。クロージャは発火するまで生かしておく必要があるので一緒に持つ。
pub(crate) struct RoundTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

pub(crate) type TimerSlot = Arc<Mutex<Option<RoundTimer>>>;

/// `delay_ms` 後に次のラウンドを配るよう予約する。
pub(crate) fn schedule_next_round(
    session_arc: &Arc<Mutex<BrowserSession>>,
    timer_slot: &TimerSlot,
    delay_ms: u32,
) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;

    let session_clone = Arc::clone(session_arc);
    let callback: Closure<dyn FnMut()> = Closure::once(move || {
        let mut session = lock_or_recover(&session_clone);
        if session.next_round() {
            info!("Next round dealt by timer.");
        }
    });

    let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay_ms as i32,
    )?;

    let mut slot = lock_or_recover(timer_slot);
    if let Some(previous) = slot.take() {
        // 普通は起きないけど、二重に予約されたら古い方を止める
        window.clear_timeout_with_handle(previous.handle);
        debug!("Replaced pending next-round timer {}", previous.handle);
    }
    *slot = Some(RoundTimer { handle, _callback: callback });
    debug!("Next round scheduled in {} ms (timer {})", delay_ms, handle);
    Ok(())
}
