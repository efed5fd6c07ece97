// src/config/mod.rs
//! 定数と設定をまとめるモジュール。

pub mod layout;
pub mod rules;

pub use rules::GameConfig;
