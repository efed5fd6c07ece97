//! テスト用のヘルパー。山札を仕込んで、狙ったターゲットと手札を配れるようにするよ。

use crate::components::card::{Card, Rank, Suit};
use crate::logic::deck::Deck;

/// 値から (スートは適当な) カードを作る。
pub(crate) fn card(value: u32) -> Card {
    let rank = Rank::from_value(value).expect("1..=13 の値を指定してね");
    Card::new(Suit::Spade, rank)
}

/// 次のラウンドで `target` と `hand` が配られるように仕込んだ山札を作るヘルパー。
///
/// 山札は末尾が一番上で、ターゲット → 手札の順に引かれる。
/// 配る前に作り直されないように、下にキングを `filler` 枚敷いておくよ。
pub(crate) fn stacked_deck(target: u32, hand: &[u32], filler: usize) -> Deck {
    let mut cards: Vec<Card> = (0..filler).map(|_| Card::new(Suit::Heart, Rank::King)).collect();
    cards.extend(hand.iter().rev().map(|&v| card(v)));
    cards.push(card(target));
    Deck::from_cards(cards, 1)
}
