//! Parse algebraic formulas and boolean conditions into typed expression
//! trees.

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;

mod regex;
