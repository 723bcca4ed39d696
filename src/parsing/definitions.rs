//! Reading variable definitions. Each non-blank line declares one variable:
//!
//! ```text
//! # comment
//! N x 3.5                 numeric
//! N v[3] 1 2 3            numeric array with one value per element
//! D colour red green blue discrete, followed by its possible values
//! D grid[4] on off        discrete array of four elements
//! ```

use tracing::debug;

use crate::language::{DefinitionError, VariableList, Variables};
use crate::parsing::validation::{validate_discrete_value, validate_name};
use crate::regex::*;

fn problem(line: usize, problem: String) -> DefinitionError {
    DefinitionError { line, problem }
}

pub fn parse_definitions(content: &str) -> Result<Variables, DefinitionError> {
    let mut variables = Variables::new();

    for (i, text) in content
        .lines()
        .enumerate()
    {
        let line = i + 1;
        let text = text.trim();

        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let captures = regex!(r"^([ND])\s+([^\s\[]+)(?:\[([0-9]+)\])?\s*(.*)$")
            .captures(text)
            .ok_or_else(|| problem(line, format!("malformed definition \"{}\"", text)))?;

        let kind = captures
            .get(1)
            .map_or("", |m| m.as_str());
        let name = captures
            .get(2)
            .map_or("", |m| m.as_str());
        let values: Vec<&str> = captures
            .get(4)
            .map_or("", |m| m.as_str())
            .split_whitespace()
            .collect();

        validate_name(name).map_err(|error| problem(line, error.to_string()))?;

        if variables
            .parse_variable_name(name)
            .is_some()
        {
            return Err(problem(
                line,
                format!("\"{}\" is already defined", name),
            ));
        }

        let elements = match captures.get(3) {
            Some(m) => match m
                .as_str()
                .parse::<usize>()
            {
                Ok(0) | Err(_) => {
                    return Err(problem(
                        line,
                        format!("\"{}\" is not a usable array size", m.as_str()),
                    ))
                }
                Ok(elements) => Some(elements),
            },
            None => None,
        };

        match kind {
            "N" => {
                let mut numbers = Vec::with_capacity(values.len());
                for value in &values {
                    match value.parse::<f64>() {
                        Ok(value) if value.is_finite() => numbers.push(value),
                        _ => {
                            return Err(problem(
                                line,
                                format!("\"{}\" is not a number", value),
                            ))
                        }
                    }
                }

                let expected = elements.unwrap_or(1);
                if numbers.len() != expected {
                    return Err(problem(
                        line,
                        format!(
                            "\"{}\" needs {} value{} but has {}",
                            name,
                            expected,
                            if expected == 1 { "" } else { "s" },
                            numbers.len()
                        ),
                    ));
                }

                match elements {
                    Some(_) => variables.add_numeric_array(name, numbers),
                    None => variables.add_numeric(name, numbers[0]),
                };
            }
            _ => {
                if values.is_empty() {
                    return Err(problem(
                        line,
                        format!("\"{}\" needs at least one value", name),
                    ));
                }
                for value in &values {
                    validate_discrete_value(value)
                        .map_err(|error| problem(line, error.to_string()))?;
                }

                let names = values
                    .iter()
                    .map(|value| value.to_string())
                    .collect();

                match elements {
                    Some(elements) => variables.add_discrete_array(name, elements, names),
                    None => variables.add_discrete(name, names),
                };
            }
        }
    }

    debug!("Defined {} variables", variables.len());
    Ok(variables)
}
