// src/components/card.rs

// serde を使う宣言！カード情報を JSON にして JS 側に渡す時に使うよ！
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// このゲームではスートは見た目だけ。計算には一切使わないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

impl Suit {
    /// 画面表示用の記号。
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 判別値がそのままカードの「値」(1..=13) になってるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // J (11 扱い)
    Queen, // Q (12 扱い)
    King,  // K (13 扱い)
}

impl Rank {
    /// 式で使う数値 (1..=13)。
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// カードに印字される文字。
    pub fn display(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// 値 (1..=13) からランクを逆引きするよ。範囲外なら None。テストでカードを仕込む時用。
    #[cfg(test)]
    pub fn from_value(value: u32) -> Option<Rank> {
        ALL_RANKS.iter().copied().find(|rank| rank.value() == value)
    }
}

/// デッキを組み立てる時の順番。♥ ♦ ♣ ♠ の順だよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す値オブジェクトだよ！🃏
///
/// 一度作ったら変わらないので `Copy` にしてある。
/// 同じ値のカードはスート違いで 4 枚ずつ存在するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn value(&self) -> u32 {
        self.rank.value()
    }

    pub fn display(&self) -> &'static str {
        self.rank.display()
    }
}
