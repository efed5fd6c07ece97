// src/app/session.rs
//! プレイヤーの操作 (提出・パス・次のラウンド) を受け取る境界。
//!
//! ここで `GameError` を全部メッセージに変換するので、エラーがこれより外に漏れることはないよ。

use itertools::Itertools;
use log::{info, warn};

use crate::app::renderer::{MessageKind, Renderer};
use crate::error::GameError;
use crate::logic::evaluator::Evaluator;
use crate::logic::round::{Outcome, RoundState};

pub struct GameSession<R: Renderer> {
    state: RoundState,
    renderer: R,
    evaluator: Box<dyn Evaluator>,
}

impl<R: Renderer> GameSession<R> {
    pub fn new(state: RoundState, renderer: R, evaluator: Box<dyn Evaluator>) -> Self {
        Self { state, renderer, evaluator }
    }

    /// 最初のラウンドを配って描画する。
    pub fn start(&mut self) {
        info!("Starting Formula Frenzy!");
        self.deal_round();
    }

    /// 式を提出する。次のラウンドが予約されたら、その待ち時間 (ms) を返すよ。
    /// 呼び出し側はその時間が経ったら `next_round` を呼ぶこと。
    pub fn submit(&mut self, formula: &str) -> Option<u32> {
        match self.state.submit_formula(formula, self.evaluator.as_ref()) {
            Ok(outcome) => {
                let kind = if outcome.is_match() { MessageKind::Success } else { MessageKind::Error };
                self.renderer.on_message(&outcome_message(&outcome), kind);
                if outcome.is_match() {
                    // スコアだけ先に反映しておく (カードは次のラウンドで配り直す)
                    self.render_current_round();
                }
                outcome.next_round_delay()
            }
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    /// 手札だけ配り直す。
    pub fn pass(&mut self) {
        match self.state.pass_hand() {
            Ok(_) => {
                self.renderer.on_message("Passed. Here's a new hand.", MessageKind::Normal);
                self.render_current_round();
            }
            Err(err) => self.report_error(&err),
        }
    }

    /// 正解後の待ち時間が終わった時に呼ばれる。配り直したら true。
    pub fn next_round(&mut self) -> bool {
        match self.state.advance_round() {
            Ok(true) => {
                self.renderer.clear_input();
                self.render_current_round();
                true
            }
            Ok(false) => false,
            Err(err) => {
                self.report_error(&err);
                false
            }
        }
    }

    fn deal_round(&mut self) {
        match self.state.start_new_round() {
            Ok(_) => {
                self.renderer.clear_input();
                self.render_current_round();
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn render_current_round(&mut self) {
        if let Some(target) = self.state.target() {
            self.renderer.on_round_rendered(&target, self.state.hand(), self.state.score());
        }
    }

    fn report_error(&mut self, err: &GameError) {
        warn!("Action rejected: {}", err);
        let (text, kind) = error_message(err);
        self.renderer.on_message(&text, kind);
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn set_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        self.evaluator = evaluator;
    }
}

/// 提出結果をプレイヤー向けの文章にする。
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::FormulaFrenzy { result, target, points, .. } => {
            format!("Formula Frenzy! +{} {}! ({} = {})", points, point_unit(*points), result, target)
        }
        Outcome::Correct { result, target, points, .. } => {
            format!("Correct! +{} {}. ({} = {})", points, point_unit(*points), result, target)
        }
        Outcome::Incorrect { result, target } => {
            format!("Incorrect. Your formula equals {}, not {}.", result, target)
        }
    }
}

fn point_unit(points: u32) -> &'static str {
    if points == 1 {
        "point"
    } else {
        "points"
    }
}

/// エラーをプレイヤー向けの文章と色にする。
pub fn error_message(err: &GameError) -> (String, MessageKind) {
    match err {
        GameError::EmptyInput => ("Please enter a formula.".to_string(), MessageKind::Error),
        GameError::InvalidCardUsage { hand_values, .. } => (
            format!(
                "Invalid formula! You can only use the numbers in your hand: {}.",
                hand_values.iter().join(", ")
            ),
            MessageKind::Error,
        ),
        GameError::FormulaEvaluation(_) => ("Invalid math formula. Try again!".to_string(), MessageKind::Error),
        GameError::EmptyDeck => (
            "The deck ran out and was reshuffled. Please try again.".to_string(),
            MessageKind::Error,
        ),
        GameError::RoundAdvancePending => {
            ("Hold on, the next round is being dealt.".to_string(), MessageKind::Normal)
        }
        GameError::NoActiveRound => ("The game has not started yet.".to_string(), MessageKind::Error),
    }
}
