//! Combining formatted fragments into output text

use crate::formatting::*;
use crate::language::*;

/// We do the formatting in two passes. First we convert from our Abstract
/// Syntax Tree types into a Vec of "fragments" (Syntax tag, String pairs).
/// Then second we apply the specified renderer to each pair to result in an
/// embellished/highlighted String.
pub fn render_function(
    renderer: &impl Render,
    function: &Function,
    variables: &dyn VariableList,
) -> String {
    let fragments = format_function(function, variables);
    render(renderer, fragments)
}

pub fn render_decision(
    renderer: &impl Render,
    decision: &Decision,
    variables: &dyn VariableList,
) -> String {
    let fragments = format_decision(decision, variables);
    render(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
pub fn render(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
