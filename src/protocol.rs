// src/protocol.rs

// このファイルは、Rust (WASM) 側から JavaScript 側に渡すデータの形を定義するよ！💌
// `Serialize` で JSON 文字列にして渡す。デバッグ表示や、JS 側で独自に描画したい時に使えるね。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::game_state::RoundPhase;

/// カード1枚ぶんの表示用データ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    pub display: String,
    pub value: u32,
    pub suit: String, // ♥ ♦ ♣ ♠ (見た目だけ)
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        CardData {
            display: card.display().to_string(),
            value: card.value(),
            suit: card.suit.symbol().to_string(),
        }
    }
}

/// ゲーム全体の今の状態。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    /// まだ一度も配っていなければ None
    pub target: Option<CardData>,
    pub hand: Vec<CardData>,
    pub score: u32,
    pub phase: RoundPhase,
    pub deck_remaining: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn card_data_from_card() {
        let data = CardData::from(&Card::new(Suit::Diamond, Rank::Queen));
        assert_eq!(data, CardData { display: "Q".to_string(), value: 12, suit: "♦".to_string() });
    }

    #[test]
    fn game_state_data_to_json() {
        let state = GameStateData {
            target: Some(CardData::from(&Card::new(Suit::Heart, Rank::Ten))),
            hand: vec![CardData::from(&Card::new(Suit::Spade, Rank::Ace))],
            score: 4,
            phase: RoundPhase::Playing,
            deck_remaining: 40,
        };
        let json = serde_json::to_string(&state).expect("シリアライズできるはず");
        assert!(json.contains("\"score\":4"));
        assert!(json.contains("\"display\":\"10\""));
        assert!(json.contains("\"phase\":\"Playing\""));

        let back: GameStateData = serde_json::from_str(&json).expect("デシリアライズできるはず");
        assert_eq!(back, state);
        println!("GameStateData の JSON テスト、成功！🎉");
    }
}
