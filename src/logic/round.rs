// src/logic/round.rs
//! 1ラウンドぶんの状態 (ターゲット、手札、スコア) と、その状態遷移だよ！
//!
//! グローバル変数は使わず、`RoundState` が山札も含めて全部持っている。
//! 状態を変えるのは必ずこのメソッド経由。

use itertools::Itertools;
use log::{debug, info};

use crate::components::card::Card;
use crate::components::game_state::RoundPhase;
use crate::config::rules::GameConfig;
use crate::error::GameError;
use crate::logic::deck::Deck;
use crate::logic::evaluator::Evaluator;
use crate::logic::scoring::ScoringPolicy;
use crate::logic::validator::{self, Validation};
use crate::protocol::{CardData, GameStateData};

/// 式を提出した結果。
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 正解！
    Correct { result: f64, target: u32, points: u32, next_round_in_ms: u32 },
    /// 手札を全部使って正解！ボーナス！
    FormulaFrenzy { result: f64, target: u32, points: u32, next_round_in_ms: u32 },
    /// 計算はできたけど、ターゲットと違った。
    Incorrect { result: f64, target: u32 },
}

impl Outcome {
    /// 次のラウンドが予約されたなら、その待ち時間 (ms)。
    pub fn next_round_delay(&self) -> Option<u32> {
        match self {
            Outcome::Correct { next_round_in_ms, .. } | Outcome::FormulaFrenzy { next_round_in_ms, .. } => {
                Some(*next_round_in_ms)
            }
            Outcome::Incorrect { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.next_round_delay().is_some()
    }
}

#[derive(Debug, Clone)]
pub struct RoundState {
    deck: Deck,
    target: Option<Card>,
    hand: Vec<Card>,
    score: u32,
    phase: RoundPhase,
    config: GameConfig,
    scoring: ScoringPolicy,
}

impl RoundState {
    /// シャッフル済みの新しい山札で作る。まだラウンドは配らないよ。
    pub fn new(config: GameConfig) -> Self {
        Self::with_deck(config, Deck::new())
    }

    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        let scoring = ScoringPolicy::from_config(&config);
        Self {
            deck,
            target: None,
            hand: Vec::with_capacity(config.hand_size),
            score: 0,
            phase: RoundPhase::Playing,
            config,
            scoring,
        }
    }

    /// 新しいラウンドを配るよ！
    ///
    /// 1. 山札が少なければ作り直す (ここだけ。パスの時はやらない)
    /// 2. ターゲットを1枚
    /// 3. 手札を `hand_size` 枚
    pub fn start_new_round(&mut self) -> Result<(Card, Vec<Card>), GameError> {
        self.deck.ensure_capacity(self.config.reshuffle_threshold);

        let target = self.deck.draw_or_refill()?;
        let hand = self.draw_hand()?;

        self.target = Some(target);
        self.hand = hand;
        self.phase = RoundPhase::Playing;
        info!(
            "New round dealt: target {} / hand [{}] ({} cards left in deck)",
            target.display(),
            self.hand.iter().map(|c| c.display()).join(", "),
            self.deck.len()
        );
        Ok((target, self.hand.clone()))
    }

    /// 手札だけ配り直す。ターゲットとスコアはそのまま。
    ///
    /// 山札の残り枚数チェックはしないので、パスを続けると山札が尽きることがある。
    /// 尽きたら `Deck::draw_or_refill` がその場で作り直すよ。
    pub fn pass_hand(&mut self) -> Result<Vec<Card>, GameError> {
        self.ensure_accepting_input()?;
        self.hand = self.draw_hand()?;
        info!("Hand passed. New hand has {} cards ({} left in deck)", self.hand.len(), self.deck.len());
        Ok(self.hand.clone())
    }

    /// 式を提出して判定するよ。ゲームの中心！
    ///
    /// 失敗した時 (`Err` や `Outcome::Incorrect`) は状態を一切変えない。
    pub fn submit_formula(&mut self, formula: &str, evaluator: &dyn Evaluator) -> Result<Outcome, GameError> {
        let target = self.ensure_accepting_input()?;

        if formula.trim().is_empty() {
            return Err(GameError::EmptyInput);
        }

        // 手札のカードだけを使っているか
        let numbers = validator::extract_numbers(formula);
        let hand_values = self.hand_values();
        let cards_used = match validator::validate(&numbers, &hand_values) {
            Validation::Matched { consumed } => consumed.len(),
            Validation::Mismatch { unmatched } => {
                debug!("Formula '{}' uses {} which is not in hand {:?}", formula, unmatched, hand_values);
                return Err(GameError::InvalidCardUsage { unmatched, hand_values });
            }
        };

        let result = evaluator.evaluate(formula)?;
        let target_value = target.value();

        if !self.matches_target(result, target_value) {
            debug!("Formula '{}' = {} but target is {}", formula, result, target_value);
            return Ok(Outcome::Incorrect { result, target: target_value });
        }

        // 正解！使ったカードの枚数で得点が決まる
        let points = self.scoring.score_delta(cards_used);
        self.score += points;
        self.phase = RoundPhase::AwaitingNextRound;
        let next_round_in_ms = self.config.next_round_delay_ms;
        info!("Formula '{}' matched target {} using {} cards: +{} (score {})", formula, target_value, cards_used, points, self.score);

        if self.scoring.is_frenzy(cards_used) {
            Ok(Outcome::FormulaFrenzy { result, target: target_value, points, next_round_in_ms })
        } else {
            Ok(Outcome::Correct { result, target: target_value, points, next_round_in_ms })
        }
    }

    /// 正解後の待ち時間が終わった時に呼ぶ。次のラウンドを配ったら true。
    ///
    /// 待ち状態じゃなければ何もしない (タイマーが二重に発火しても二回配らない)。
    pub fn advance_round(&mut self) -> Result<bool, GameError> {
        if self.phase != RoundPhase::AwaitingNextRound {
            debug!("advance_round ignored: no round advance pending");
            return Ok(false);
        }
        self.start_new_round()?;
        Ok(true)
    }

    fn draw_hand(&mut self) -> Result<Vec<Card>, GameError> {
        (0..self.config.hand_size).map(|_| self.deck.draw_or_refill()).collect()
    }

    /// 入力を受け付けられる状態なら、今のターゲットを返す。
    fn ensure_accepting_input(&self) -> Result<Card, GameError> {
        if !self.phase.accepts_input() {
            return Err(GameError::RoundAdvancePending);
        }
        self.target.ok_or(GameError::NoActiveRound)
    }

    fn matches_target(&self, result: f64, target_value: u32) -> bool {
        let target = f64::from(target_value);
        if self.config.equality_tolerance > 0.0 {
            (result - target).abs() <= self.config.equality_tolerance
        } else {
            result == target
        }
    }

    pub fn target(&self) -> Option<Card> {
        self.target
    }

    /// 手札 (配られた順)
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_values(&self) -> Vec<u32> {
        self.hand.iter().map(Card::value).collect()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn snapshot(&self) -> GameStateData {
        GameStateData {
            target: self.target.as_ref().map(CardData::from),
            hand: self.hand.iter().map(CardData::from).collect(),
            score: self.score,
            phase: self.phase,
            deck_remaining: self.deck.len(),
        }
    }
}
