// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use crate::error::GameError;
use log::{debug, info, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 4 スート × 13 ランクの順に並べるだけで、シャッフルはしないよ。
/// 同じ値のカードが 4 枚ずつ入ることになるね。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// 山札。並び順つきのカードの列で、末尾が「一番上」だよ。
///
/// 乱数生成器も山札が持っているので、シード固定で作ればテストで結果を再現できる！
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    /// 作ってシャッフル済みの山札を返すよ。ゲーム開始時はこれ。
    pub fn new() -> Self {
        let mut deck = Self::empty(StdRng::from_entropy());
        deck.build();
        deck.shuffle();
        deck
    }

    /// シード固定の山札 (作ってシャッフル済み)。
    pub fn with_seed(seed: u64) -> Self {
        let mut deck = Self::empty(StdRng::seed_from_u64(seed));
        deck.build();
        deck.shuffle();
        deck
    }

    /// 指定した並びの山札を作る。末尾が一番上。テストでカードを仕込む時に使うよ。
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self { cards, rng: StdRng::seed_from_u64(seed) }
    }

    fn empty(rng: StdRng) -> Self {
        Self { cards: Vec::with_capacity(DECK_SIZE), rng }
    }

    /// 中身を捨てて、52枚の並んだ状態に戻す。シャッフルはしない。
    pub fn build(&mut self) {
        self.cards = create_standard_deck();
    }

    /// その場でシャッフル。`SliceRandom::shuffle` は Fisher–Yates だから偏りなし！
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// 一番上 (末尾) のカードを1枚引く。空ならエラー。
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// 1枚引く。もし山札が空っぽだったら、その場で作り直してから引くよ。
    ///
    /// 本来は起きないはずの状況なので warn を出しておく。
    pub fn draw_or_refill(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            warn!("Deck was empty while drawing. Rebuilding and reshuffling.");
            self.refill();
        }
        self.draw()
    }

    /// 残りが `minimum` 枚より少なければ、残りを捨てて作り直し＆シャッフル。
    /// 作り直したら true を返す。
    pub fn ensure_capacity(&mut self, minimum: usize) -> bool {
        if self.cards.len() >= minimum {
            debug!("Deck has {} cards, no reshuffle needed (minimum {}).", self.cards.len(), minimum);
            return false;
        }
        self.refill();
        true
    }

    fn refill(&mut self) {
        self.build();
        self.shuffle();
        info!("Deck reshuffled.");
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 山札の中身 (末尾が一番上)。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use std::collections::HashMap;

    fn value_counts(cards: &[Card]) -> HashMap<u32, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.value()).or_insert(0) += 1;
        }
        counts
    }

    fn sorted(cards: &[Card]) -> Vec<(u32, Suit)> {
        let mut keys: Vec<(u32, Suit)> = cards.iter().map(|c| (c.value(), c.suit)).collect();
        keys.sort_by_key(|(value, suit)| (*value, *suit as u8));
        keys
    }

    #[test]
    fn test_create_deck_size_and_values() {
        let deck = create_standard_deck();
        assert_eq!(deck.len(), 52, "デッキのカード数が52枚じゃない！");

        let counts = value_counts(&deck);
        assert_eq!(counts.len(), 13);
        for value in 1..=13 {
            assert_eq!(counts.get(&value), Some(&4), "値 {} のカードが4枚じゃない！", value);
        }

        // 重複がないかもチェック
        let unique: std::collections::HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52, "デッキに重複カードあり！");
        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn build_does_not_shuffle() {
        let mut deck = Deck::from_cards(Vec::new(), 1);
        deck.build();
        assert_eq!(deck.cards(), create_standard_deck().as_slice());
        assert_eq!(deck.cards()[0], Card::new(Suit::Heart, Rank::Ace));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut deck = Deck::from_cards(create_standard_deck(), 7);
        let before = deck.cards().to_vec();
        deck.shuffle();
        assert_eq!(deck.len(), 52, "シャッフルでカード数が変わった！");
        assert_eq!(sorted(&before), sorted(deck.cards()), "シャッフルで中身が変わった！");
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        // シャッフル結果が元の並びと同じになる確率は 1/52! なので、
        // 何回か試して一度も変わらなければおかしい
        let mut changed = 0;
        for seed in 0..20 {
            let mut deck = Deck::from_cards(create_standard_deck(), seed);
            deck.shuffle();
            if deck.cards() != create_standard_deck().as_slice() {
                changed += 1;
            }
        }
        assert!(changed >= 19, "シャッフルしても順番が変わってない ({} / 20)", changed);
    }

    #[test]
    fn draw_takes_from_the_top() {
        let bottom = Card::new(Suit::Club, Rank::Two);
        let top = Card::new(Suit::Heart, Rank::King);
        let mut deck = Deck::from_cards(vec![bottom, top], 0);

        assert_eq!(deck.draw(), Ok(top));
        assert_eq!(deck.draw(), Ok(bottom));
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
        assert!(deck.is_empty());
    }

    #[test]
    fn draw_or_refill_recovers_from_empty_deck() {
        let mut deck = Deck::from_cards(Vec::new(), 3);
        assert!(deck.draw_or_refill().is_ok(), "空でも作り直して引けるはず");
        assert_eq!(deck.len(), 51, "作り直してから1枚引いたので51枚のはず");
    }

    #[test]
    fn ensure_capacity_rebuilds_only_when_low() {
        let mut deck = Deck::with_seed(42);
        assert!(!deck.ensure_capacity(10), "52枚あるなら作り直さない");
        assert_eq!(deck.len(), 52);

        // 9枚まで減らす
        while deck.len() > 9 {
            deck.draw().expect("まだカードがあるはず");
        }
        assert!(deck.ensure_capacity(10), "9枚なら作り直すはず");
        assert_eq!(deck.len(), 52, "残りを捨てて52枚に作り直すはず");

        let counts = value_counts(deck.cards());
        assert!(counts.values().all(|&n| n == 4), "作り直した後も値ごとに4枚ずつのはず");

        // ちょうど10枚なら作り直さない
        while deck.len() > 10 {
            deck.draw().expect("まだカードがあるはず");
        }
        assert!(!deck.ensure_capacity(10));
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn seeded_decks_are_reproducible() {
        let a = Deck::with_seed(99);
        let b = Deck::with_seed(99);
        assert_eq!(a.cards(), b.cards());
    }
}
