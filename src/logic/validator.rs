// src/logic/validator.rs
//! 式で使われた数字が、ちゃんと手札のカードだけでできているかをチェックするよ。

/// 手札チェックの結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// 全部の数字が手札のカードに対応した。
    /// `consumed` は使われた手札の位置 (数字の並び順)。
    Matched { consumed: Vec<usize> },
    /// `unmatched` に対応する (残りの) カードがなかった。
    Mismatch { unmatched: u64 },
}

impl Validation {
    #[cfg(test)]
    pub fn is_matched(&self) -> bool {
        matches!(self, Validation::Matched { .. })
    }
}

/// 式の中の「連続した数字の並び」を左から順に全部取り出すよ。
///
/// 演算子やカッコ、小数点は区切りとして扱うだけ。なので "1.5" は 1 と 5 になる。
/// u64 に収まらない長い数字は `u64::MAX` にしておく (どのカードにも一致しない)。
pub fn extract_numbers(formula: &str) -> Vec<u64> {
    let mut numbers = Vec::new();
    let mut current: Option<u64> = None;

    for ch in formula.chars() {
        match ch.to_digit(10) {
            Some(digit) => {
                let acc = current.unwrap_or(0);
                current = Some(acc.saturating_mul(10).saturating_add(u64::from(digit)));
            }
            None => {
                if let Some(number) = current.take() {
                    numbers.push(number);
                }
            }
        }
    }
    if let Some(number) = current {
        numbers.push(number);
    }
    numbers
}

/// `numbers_used` の数字を、手札の値の中から1枚ずつ消し込んでいくよ。
///
/// - 同じ値のカードが2枚あれば、その数字は2回まで使える。
/// - 1つでも対応するカードが残っていなければ、その時点で失敗 (部分点はなし)。
/// - 呼び出し側の手札はいじらない (作業用のコピーに対して消し込む)。
pub fn validate(numbers_used: &[u64], hand_values: &[u32]) -> Validation {
    // (手札の位置, 値) の作業用コピー
    let mut remaining: Vec<(usize, u32)> = hand_values.iter().copied().enumerate().collect();
    let mut consumed = Vec::with_capacity(numbers_used.len());

    for &number in numbers_used {
        let found = remaining.iter().position(|&(_, value)| u64::from(value) == number);
        match found {
            Some(slot) => {
                let (hand_index, _) = remaining.remove(slot);
                consumed.push(hand_index);
            }
            None => return Validation::Mismatch { unmatched: number },
        }
    }
    Validation::Matched { consumed }
}
