// src/error.rs
//! ゲーム中に起きるエラーをまとめた型だよ。
//! どれも致命的じゃなくて、プレイヤーに入力し直してもらえば復帰できるものばかり！

use thiserror::Error;

/// 式の評価に失敗した時のエラー。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unexpected end of formula")]
    UnexpectedEnd,

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("formula is nested too deeply")]
    TooDeep,

    #[error("result is not a finite number")]
    NonFinite,

    /// 外部の評価器 (math.js など) が投げたエラー。
    #[error("evaluator rejected formula: {0}")]
    Rejected(String),
}

/// ラウンド操作のエラー。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("no formula was entered")]
    EmptyInput,

    /// 手札にない数字が使われた。表示用に手札の値を全部持っておく。
    #[error("formula uses {unmatched}, which is not available in the hand {hand_values:?}")]
    InvalidCardUsage { unmatched: u64, hand_values: Vec<u32> },

    #[error("formula could not be evaluated: {0}")]
    FormulaEvaluation(#[from] EvalError),

    #[error("tried to draw from an empty deck")]
    EmptyDeck,

    /// 正解して次のラウンドを待っている間の入力。
    #[error("the next round is already being dealt")]
    RoundAdvancePending,

    /// まだ一度もラウンドが配られていない。
    #[error("no round has been dealt yet")]
    NoActiveRound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_error_converts_into_game_error() {
        let err: GameError = EvalError::DivisionByZero.into();
        assert_eq!(err, GameError::FormulaEvaluation(EvalError::DivisionByZero));
        assert_eq!(err.to_string(), "formula could not be evaluated: division by zero");
    }
}
