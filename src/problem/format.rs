use super::messages::generate_error_message;
use formula::{
    formatting::Render,
    language::{DefinitionError, LoadingError},
    parsing::{NameError, ParsingError, ValueError},
};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a parsing error with full details, underlining the offending text
/// in the expression
pub fn full_parsing_error(error: &ParsingError, source: &str, renderer: &impl Render) -> String {
    let (problem, details) = generate_error_message(error, renderer);
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );
    let indent = " ".repeat(j);
    let underline = "^".repeat(
        error
            .width()
            .max(1),
    );

    format!(
        r#"
{}: {}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {}{}

{}
        "#,
        "error".bright_red(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        indent,
        underline.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, source: &str, renderer: &impl Render) -> String {
    let (problem, _) = generate_error_message(error, renderer);
    let offset = error.offset();
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{} {}",
        "error".bright_red(),
        line,
        column,
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}

pub fn concise_definition_error(error: &DefinitionError, filename: &Path) -> String {
    format!(
        "{}: {}:{} {}",
        "error".bright_red(),
        filename.display(),
        error.line,
        error
            .problem
            .bold()
    )
}

pub fn concise_name_error(error: &NameError) -> String {
    format!("{}: {}", "invalid".bright_red(), error)
}

pub fn concise_value_error(value: &str, error: &ValueError) -> String {
    format!("{}: \"{}\": {}", "invalid".bright_red(), value, error)
}

// Helper functions for line/column calculation
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
