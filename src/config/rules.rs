// src/config/rules.rs
//! ゲームのルールに関する定数と、それをまとめた設定 (`GameConfig`) だよ！

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 5; // 手札の枚数
/// 新しいラウンドを配る前に、山札がこれより少なければ作り直す。
/// ターゲット 1 枚 + 手札 5 枚 + 余裕。
pub const RESHUFFLE_THRESHOLD: usize = 10;
pub const NEXT_ROUND_DELAY_MS: u32 = 1500; // 正解してから次のラウンドまでの待ち時間

pub const BASE_POINTS: u32 = 1;
pub const FRENZY_POINTS: u32 = 3; // Formula Frenzy! のボーナス
pub const FRENZY_CARD_COUNT: usize = HAND_SIZE;

/// ゲーム全体の設定。
///
/// 全部のフィールドにデフォルトがあるので、JSON では変えたい項目だけ書けば OK！
/// ```json
/// { "next_round_delay_ms": 800, "frenzy_points": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub hand_size: usize,
    pub reshuffle_threshold: usize,
    pub next_round_delay_ms: u32,
    pub base_points: u32,
    pub frenzy_points: u32,
    pub frenzy_card_count: usize,
    /// 計算結果とターゲットを比べる時の許容誤差。0.0 なら完全一致。
    pub equality_tolerance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            reshuffle_threshold: RESHUFFLE_THRESHOLD,
            next_round_delay_ms: NEXT_ROUND_DELAY_MS,
            base_points: BASE_POINTS,
            frenzy_points: FRENZY_POINTS,
            frenzy_card_count: FRENZY_CARD_COUNT,
            equality_tolerance: 0.0,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込むよ。
    ///
    /// 山札を作り直すしきい値が「ターゲット + 手札」より小さいと配れなくなるので、
    /// その場合もエラーにする。
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse game config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.hand_size == 0 {
            return Err("hand_size must be at least 1".to_string());
        }
        if self.reshuffle_threshold < self.hand_size + 1 {
            return Err(format!(
                "reshuffle_threshold ({}) must cover one target card plus a hand of {}",
                self.reshuffle_threshold, self.hand_size
            ));
        }
        if self.reshuffle_threshold > DECK_SIZE {
            return Err(format!("reshuffle_threshold ({}) exceeds the deck size", self.reshuffle_threshold));
        }
        if !(self.equality_tolerance >= 0.0) {
            return Err("equality_tolerance must be a non-negative number".to_string());
        }
        Ok(())
    }
}
