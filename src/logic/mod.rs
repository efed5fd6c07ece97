// src/logic/mod.rs
//! ゲームのルール関連モジュールをまとめるよ！
//! DOM には一切さわらないので、ブラウザなしでテストできる。

pub mod deck;
pub mod evaluator;
pub mod round;
pub mod scoring;
pub mod validator;


// よく使うものをここで再エクスポート！
pub use deck::Deck;
pub use evaluator::{ArithmeticEvaluator, Evaluator};
pub use round::{Outcome, RoundState};
pub use scoring::ScoringPolicy;
pub use validator::{extract_numbers, validate, Validation};
