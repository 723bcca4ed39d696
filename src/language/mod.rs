// Types representing formulas, decisions, and the names they refer to

mod error;
pub mod tables;
mod types;
mod variables;

// Re-export all public symbols
pub use error::*;
pub use types::*;
pub use variables::*;
