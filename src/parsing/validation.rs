//! Checks applied to names before they are given to a variable list.

use std::fmt;

use crate::language::tables::{COMPARISON_OPERATORS, GREEK_PREFIX, NAMED_CONSTANTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    Empty,
    IllegalCharacter(char, String),
    ReservedConstant(String),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "Names cannot be empty."),
            NameError::IllegalCharacter(c, name) => {
                write!(f, "Illegal character '{}' in \"{}\".", c, name)
            }
            NameError::ReservedConstant(name) => {
                write!(f, "\"{}\" is already used to represent a constant.", name)
            }
        }
    }
}

// Punctuation permitted after the first character of a name.
static PUNCTUATION: &[char] = &['_', '?', '#', '$', '%', '&', '@', ':', '.', GREEK_PREFIX];

/// Check that a name is legal for a variable or constant. Names start with a
/// letter or the Greek prefix, so that no name can be confused with the
/// start of a number or with the placeholder.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let mut chars = name.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return Err(NameError::Empty),
    };

    if !(first.is_ascii_alphabetic() || first == GREEK_PREFIX) {
        return Err(NameError::IllegalCharacter(first, name.to_string()));
    }

    for c in chars {
        if !(c.is_ascii_alphanumeric() || PUNCTUATION.contains(&c)) {
            return Err(NameError::IllegalCharacter(c, name.to_string()));
        }
    }

    if NAMED_CONSTANTS
        .iter()
        .any(|(constant, _)| *constant == name)
    {
        return Err(NameError::ReservedConstant(name.to_string()));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    Empty,
    ContainsSpace,
    ContainsOperator,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::Empty => write!(f, "Discrete values cannot be empty"),
            ValueError::ContainsSpace => write!(f, "Discrete values cannot contain spaces"),
            ValueError::ContainsOperator => {
                write!(f, "Discrete values cannot contain comparison operators")
            }
        }
    }
}

/// Check a value name for a discrete variable. Any character is allowed
/// except whitespace and the comparison operators.
pub fn validate_discrete_value(value: &str) -> Result<(), ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty);
    }
    if value
        .chars()
        .any(char::is_whitespace)
    {
        return Err(ValueError::ContainsSpace);
    }
    if COMPARISON_OPERATORS
        .iter()
        .any(|(symbol, _)| value.contains(symbol))
    {
        return Err(ValueError::ContainsOperator);
    }

    Ok(())
}
