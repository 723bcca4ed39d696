//! Printing formula and decision trees back to text

mod formatter;
mod renderer;
mod syntax;

pub use formatter::{format_decision, format_function};
pub use renderer::{render, render_decision, render_function};
pub use syntax::{Identity, Render, Syntax};
