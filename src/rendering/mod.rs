//! Output backends for formatted formulas

mod terminal;

pub use terminal::Terminal;
