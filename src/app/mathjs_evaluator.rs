// src/app/mathjs_evaluator.rs
//! ページに読み込まれている math.js の `math.evaluate` で式を計算する評価器。
//!
//! index.html で math.js を `<script>` 読み込みしている時だけ使える。
//! 読み込まれていなければ `math` が未定義なので、評価エラーとして扱われるよ。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::EvalError;
use crate::logic::evaluator::Evaluator;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = math, js_name = evaluate, catch)]
    fn mathjs_evaluate(expr: &str) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MathJsEvaluator;

impl Evaluator for MathJsEvaluator {
    fn evaluate(&self, formula: &str) -> Result<f64, EvalError> {
        let value = mathjs_evaluate(formula).map_err(|e| EvalError::Rejected(describe_js_error(&e)))?;
        let number = value
            .as_f64()
            .ok_or_else(|| EvalError::Rejected(format!("math.js returned a non-number: {:?}", value)))?;
        if !number.is_finite() {
            return Err(EvalError::NonFinite);
        }
        Ok(number)
    }
}

/// JS の例外からメッセージを取り出す。
fn describe_js_error(error: &JsValue) -> String {
    if let Some(js_error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(js_error.message());
    }
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}
