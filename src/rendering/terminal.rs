//! Renderers for colourizing formulas

use crate::formatting::*;
use owo_colors::OwoColorize;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Function => content // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Variable => content // variable.parameter - #729fcf (light blue) bold
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .bold()
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Constant => content // constant.language
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Operator => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Keyword => content // keyword.control
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Value => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Placeholder => content
                .color(owo_colors::Rgb(0xf5, 0x79, 0x00))
                .bold()
                .to_string(),
            Syntax::Structure => content // punctuation - #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
        }
    }
}
