//! Gets the current round state from the session and converts it to JSON.

use std::sync::{Arc, Mutex};

use log::{error, info};
use wasm_bindgen::JsValue;

use crate::app::event_handler::{lock_or_recover, BrowserSession};
use crate::logic::round::RoundState;

/// ラウンドの状態を JSON 文字列にする。
pub fn round_state_json(state: &RoundState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&state.snapshot())
}

/// セッションの状態を取得し、JSON 文字列として返します。
/// (GameApp::get_state_json のロジック)
pub fn get_state_json(session_arc: &Arc<Mutex<BrowserSession>>) -> Result<JsValue, JsValue> {
    let session = lock_or_recover(session_arc);
    match round_state_json(session.state()) {
        Ok(json_string) => {
            info!("Successfully serialized round state to JSON.");
            Ok(JsValue::from_str(&json_string))
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize round state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::GameConfig;
    use crate::test_support::stacked_deck;

    #[test]
    fn round_state_json_contains_round() {
        let mut state = RoundState::with_deck(GameConfig::default(), stacked_deck(12, &[1, 2, 3, 4, 5], 20));
        let before = round_state_json(&state).expect("シリアライズできるはず");
        assert!(before.contains("\"target\":null"), "配る前はターゲットなし: {}", before);

        state.start_new_round().expect("配れるはず");
        let json = round_state_json(&state).expect("シリアライズできるはず");
        let value: serde_json::Value = serde_json::from_str(&json).expect("JSON のはず");

        assert_eq!(value["target"]["display"], "Q");
        assert_eq!(value["hand"].as_array().map(|h| h.len()), Some(5));
        assert_eq!(value["score"], 0);
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["deck_remaining"], 20);
    }
}
