// src/logic/evaluator.rs
//! 式の文字列を計算して数値にする「評価器」だよ。
//!
//! ラウンドのロジックは `Evaluator` トレイトにしか依存しないので、
//! ブラウザでは math.js を使う実装、テストではこのファイルの `ArithmeticEvaluator` を差し込める！

use crate::error::EvalError;

/// カッコ・符号・べき乗の入れ子の深さの上限。これを超える式はスタックを使い切る前に弾く。
pub const MAX_NESTING_DEPTH: usize = 256;

/// 式を評価して数値を返すもの。
pub trait Evaluator {
    fn evaluate(&self, formula: &str) -> Result<f64, EvalError>;
}

/// 四則演算とべき乗とカッコだけを扱う、小さな再帰下降パーサー。
///
/// 文法:
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := unary (('*' | '/') unary)*
/// unary  := ('+' | '-') unary | power
/// power  := atom ('^' unary)?
/// atom   := number | '(' expr ')'
/// ```
/// 入力をコードとして実行することは絶対にないよ。
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticEvaluator;

impl Evaluator for ArithmeticEvaluator {
    fn evaluate(&self, formula: &str) -> Result<f64, EvalError> {
        let mut parser = Parser::new(formula);
        let value = parser.expr()?;
        parser.skip_whitespace();
        if let Some((position, found)) = parser.peek() {
            return Err(EvalError::UnexpectedChar { found, position });
        }
        if !value.is_finite() {
            return Err(EvalError::NonFinite);
        }
        Ok(value)
    }
}

struct Parser {
    chars: Vec<(usize, char)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(src: &str) -> Self {
        Self { chars: src.char_indices().collect(), pos: 0, depth: 0 }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.chars.get(self.pos), Some((_, c)) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    /// 空白を飛ばしてから、次の文字が `expected` なら消費する。
    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            if self.eat('*') {
                value *= self.unary()?;
            } else if self.eat('/') {
                let divisor = self.unary()?;
                // math.js なら Infinity を返すところだけど、ここでは評価エラーにする
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    /// 入れ子はすべてここを通るので、深さはここで数える。
    fn unary(&mut self) -> Result<f64, EvalError> {
        self.depth += 1;
        let result = if self.depth > MAX_NESTING_DEPTH { Err(EvalError::TooDeep) } else { self.signed() };
        self.depth -= 1;
        result
    }

    fn signed(&mut self) -> Result<f64, EvalError> {
        if self.eat('-') {
            return Ok(-self.unary()?);
        }
        if self.eat('+') {
            return self.unary();
        }
        self.power()
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.atom()?;
        if self.eat('^') {
            // 右結合: 2^3^2 = 2^(3^2)
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, EvalError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(EvalError::UnexpectedEnd),
            Some((_, '(')) => {
                self.pos += 1;
                let value = self.expr()?;
                if self.eat(')') {
                    Ok(value)
                } else {
                    match self.peek() {
                        Some((position, found)) => Err(EvalError::UnexpectedChar { found, position }),
                        None => Err(EvalError::UnexpectedEnd),
                    }
                }
            }
            Some((_, c)) if c.is_ascii_digit() || c == '.' => self.number(),
            Some((position, found)) => Err(EvalError::UnexpectedChar { found, position }),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        while matches!(self.chars.get(self.pos), Some((_, c)) if c.is_ascii_digit() || *c == '.') {
            self.pos += 1;
        }
        let literal: String = self.chars[start..self.pos].iter().map(|(_, c)| c).collect();
        literal.parse::<f64>().map_err(|_| EvalError::InvalidNumber(literal))
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    fn eval(formula: &str) -> Result<f64, EvalError> {
        ArithmeticEvaluator.evaluate(formula)
    }

    #[test]
    fn evaluates_basic_arithmetic() {
        assert_eq!(eval("1+2+3+4"), Ok(10.0));
        assert_eq!(eval("1+2+3+4+5"), Ok(15.0));
        assert_eq!(eval("2*3+4"), Ok(10.0));
        assert_eq!(eval("2*(3+4)"), Ok(14.0));
        assert_eq!(eval("10 - 4 - 3"), Ok(3.0), "左結合のはず");
        assert_eq!(eval("12 / 4 / 3"), Ok(1.0));
        println!("四則演算テスト、成功！🎉");
    }

    #[test]
    fn evaluates_unary_power_and_decimals() {
        assert_eq!(eval("-3 + 5"), Ok(2.0));
        assert_eq!(eval("-(2+3)"), Ok(-5.0));
        assert_eq!(eval("2^3"), Ok(8.0));
        assert_eq!(eval("2^3^2"), Ok(512.0), "べき乗は右結合のはず");
        assert_eq!(eval("1.5+2"), Ok(3.5));
        assert_eq!(eval("  ( 7 )  "), Ok(7.0));
    }

    #[test]
    fn rejects_malformed_formulas() {
        assert_eq!(eval("abc"), Err(EvalError::UnexpectedChar { found: 'a', position: 0 }));
        assert_eq!(eval(""), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("1+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("(1+2"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("1 2"), Err(EvalError::UnexpectedChar { found: '2', position: 2 }));
        assert_eq!(eval("1..2"), Err(EvalError::InvalidNumber("1..2".to_string())));
    }

    #[test]
    fn rejects_division_by_zero_and_overflow() {
        assert_eq!(eval("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("5/(2-2)"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("10^400"), Err(EvalError::NonFinite));
    }

    #[test]
    fn deeply_nested_formulas_are_rejected_without_overflowing() {
        let parens = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
        assert_eq!(eval(&parens), Err(EvalError::TooDeep));

        let signs = format!("{}1", "-".repeat(200_000));
        assert_eq!(eval(&signs), Err(EvalError::TooDeep));

        let powers = format!("{}1", "1^".repeat(200_000));
        assert_eq!(eval(&powers), Err(EvalError::TooDeep));
    }

    #[test]
    fn nesting_below_the_limit_still_evaluates() {
        let depth = MAX_NESTING_DEPTH / 2;
        let parens = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(eval(&parens), Ok(7.0));
        assert_eq!(eval("- - -3"), Ok(-3.0));
        // 横に長いだけの式は深さに数えない
        let long_sum = vec!["1"; 10_000].join("+");
        assert_eq!(eval(&long_sum), Ok(10_000.0));
    }

    #[test]
    fn float_noise_is_reported_as_is() {
        // 10/3*3 は浮動小数点でもちょうど 10 になる
        assert_eq!(eval("10/3*3"), Ok(10.0));
        // 0.1+0.2 は 0.3 にならない (許容誤差の設定で吸収する)
        let value = eval("0.1+0.2").expect("計算できるはず");
        assert_ne!(value, 0.3);
        assert!((value - 0.3).abs() < 1e-9);
    }
}
