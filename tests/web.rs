//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use formula_frenzy::config::rules::GameConfig;
use formula_frenzy::logic::{ArithmeticEvaluator, Deck, Evaluator, RoundState};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn entropy_seeded_deck_deals_a_round() {
    // getrandom の js バックエンドで乱数が取れることの確認
    let mut state = RoundState::with_deck(GameConfig::default(), Deck::new());
    let (_target, hand) = state.start_new_round().expect("ブラウザでも配れるはず");
    assert_eq!(hand.len(), 5);
    assert_eq!(state.deck_len(), 52 - 6);
}

#[wasm_bindgen_test]
fn arithmetic_evaluator_runs_in_wasm() {
    assert_eq!(ArithmeticEvaluator.evaluate("(1+2)*3"), Ok(9.0));
}
