//! Parsers for formulas and decisions

use std::path::Path;
use tracing::{debug, error};

use crate::language::{Decision, Function, LoadingError, VariableList};
use crate::parsing::parser::Parser;

mod decision;
mod definitions;
pub mod parser;
mod scan;
mod validation;

pub use definitions::parse_definitions;
pub use parser::ParsingError;
pub use validation::{validate_discrete_value, validate_name, NameError, ValueError};

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that anything parsed from it can borrow from the
/// content.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Somewhere to send the message describing why a parse failed.
pub trait Reporter {
    fn report_error(&self, message: &str);
}

/// A [`Reporter`] that sends messages to the log.
pub struct Logged;

impl Reporter for Logged {
    fn report_error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Parse text into a Function tree. The placeholder `?` is only accepted
/// when `allow_placeholder` is set.
pub fn parse_function<'i>(
    expr: &'i str,
    variables: &dyn VariableList,
    allow_placeholder: bool,
) -> Result<Function, ParsingError<'i>> {
    debug!(expr, "Parsing function");

    let result = Parser::new(expr, variables, allow_placeholder).parse_function();

    match &result {
        Ok(function) => debug!("Parsed {} nodes", function.size()),
        Err(error) => debug!(offset = error.offset(), "{}", error),
    }

    result
}

/// As [`parse_function`], but on failure the message is handed to the
/// reporter, exactly once, and nothing is returned.
pub fn parse_function_reporting(
    expr: &str,
    variables: &dyn VariableList,
    allow_placeholder: bool,
    reporter: &dyn Reporter,
) -> Option<Function> {
    match parse_function(expr, variables, allow_placeholder) {
        Ok(function) => Some(function),
        Err(error) => {
            reporter.report_error(&error.message());
            None
        }
    }
}

/// Parse text into a Decision tree.
pub fn parse_decision<'i>(
    expr: &'i str,
    variables: &dyn VariableList,
) -> Result<Decision, ParsingError<'i>> {
    debug!(expr, "Parsing decision");

    let result = Parser::new(expr, variables, false).parse_decision();

    if let Err(error) = &result {
        debug!(offset = error.offset(), "{}", error);
    }

    result
}

pub fn parse_decision_reporting(
    expr: &str,
    variables: &dyn VariableList,
    reporter: &dyn Reporter,
) -> Option<Decision> {
    match parse_decision(expr, variables) {
        Ok(decision) => Some(decision),
        Err(error) => {
            reporter.report_error(&error.message());
            None
        }
    }
}
