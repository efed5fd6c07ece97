// src/logic/scoring.rs
//! 正解した時の得点計算。

use crate::config::rules::{GameConfig, BASE_POINTS, FRENZY_CARD_COUNT, FRENZY_POINTS};

/// 得点ルール。手札を全部使い切ったら Formula Frenzy! でボーナス。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub base_points: u32,
    pub frenzy_points: u32,
    pub frenzy_card_count: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            base_points: BASE_POINTS,
            frenzy_points: FRENZY_POINTS,
            frenzy_card_count: FRENZY_CARD_COUNT,
        }
    }
}

impl ScoringPolicy {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            base_points: config.base_points,
            frenzy_points: config.frenzy_points,
            frenzy_card_count: config.frenzy_card_count,
        }
    }

    pub fn is_frenzy(&self, cards_used: usize) -> bool {
        cards_used == self.frenzy_card_count
    }

    /// 式がターゲットと一致した時だけ呼ぶこと。
    pub fn score_delta(&self, cards_used: usize) -> u32 {
        if self.is_frenzy(cards_used) {
            self.frenzy_points
        } else {
            self.base_points
        }
    }
}
