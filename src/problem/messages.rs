use formula::{
    formatting::{Render, Syntax},
    parsing::ParsingError,
};

// Style a short sample expression, one (syntax, text) fragment at a time.
fn example(renderer: &dyn Render, fragments: &[(Syntax, &str)]) -> String {
    fragments
        .iter()
        .map(|(syntax, text)| renderer.style(*syntax, text))
        .collect()
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    let problem = error.message();

    let details = match error {
        ParsingError::EmptyExpression(_) => r#"
There is nothing here to parse. This often happens when an operator is missing
an operand, or when a pair of parentheses or brackets is left empty.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::TooFewArguments(_, _) | ParsingError::TooManyArguments(_, _) => format!(
            r#"
Some functions take a fixed number of arguments, separated by commas. For
example the logarithm to an arbitrary base is written

    {}

with the base first. The functions max, min, and parallel accept any number
of arguments.
            "#,
            example(
                renderer,
                &[
                    (Syntax::Function, "log"),
                    (Syntax::Structure, "("),
                    (Syntax::Numeric, "3"),
                    (Syntax::Structure, ", "),
                    (Syntax::Variable, "x"),
                    (Syntax::Structure, ")"),
                ]
            )
        )
        .trim_ascii()
        .to_string(),
        ParsingError::NotDiscrete(_, _) => format!(
            r#"
The value and index functions work on variables that take one of a set of
named values, as in

    {}
            "#,
            example(
                renderer,
                &[
                    (Syntax::Function, "index"),
                    (Syntax::Structure, "("),
                    (Syntax::Variable, "colour"),
                    (Syntax::Structure, ")"),
                ]
            )
        )
        .trim_ascii()
        .to_string(),
        ParsingError::NotNumeric(_, _) => r#"
Only numeric variables can be used directly in a formula. To use a discrete
variable, refer to its value or index with the value() or index() functions.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::IsArray(_, _) => format!(
            r#"
This variable holds an array of values, so a reference to it must say which
element is meant:

    {}
            "#,
            example(
                renderer,
                &[
                    (Syntax::Variable, "v"),
                    (Syntax::Structure, "["),
                    (Syntax::Numeric, "1"),
                    (Syntax::Structure, "]"),
                ]
            )
        )
        .trim_ascii()
        .to_string(),
        ParsingError::NotArray(_, _) => r#"
Only array variables can be followed by an index in square brackets.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::NotVariable(_, _) => r#"
An index in square brackets can only follow the name of an array variable, and
no variable with this name has been defined.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::OutOfRange(_, _) => r#"
Numbers must fit in a double precision floating point value, whose magnitude
cannot exceed about 1.8e308.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::InvalidFunction(_, _) => format!(
            r#"
This text is not a number, a named constant, a defined variable, or a call to
a known function. Function arguments go in parentheses or square brackets, as
in {} or {}.
            "#,
            example(
                renderer,
                &[
                    (Syntax::Function, "sqrt"),
                    (Syntax::Structure, "("),
                    (Syntax::Variable, "x"),
                    (Syntax::Structure, ")"),
                ]
            ),
            example(
                renderer,
                &[
                    (Syntax::Function, "Sqrt"),
                    (Syntax::Structure, "["),
                    (Syntax::Variable, "x"),
                    (Syntax::Structure, "]"),
                ]
            )
        )
        .trim_ascii()
        .to_string(),
        ParsingError::EmptyDecision(_) => r#"
There is nothing here to parse. Check that each of and, or, xor, and not has
a condition on both sides.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::InvalidDecision(_, _) => format!(
            r#"
A condition is True or False, a comparison between two formulas such as
{}, a test of a discrete variable like {}, or conditions
combined with and, or, xor, and not.
            "#,
            example(
                renderer,
                &[
                    (Syntax::Variable, "x"),
                    (Syntax::Operator, " < "),
                    (Syntax::Numeric, "3"),
                ]
            ),
            example(
                renderer,
                &[
                    (Syntax::Variable, "colour"),
                    (Syntax::Operator, " = "),
                    (Syntax::Value, "red"),
                ]
            )
        )
        .trim_ascii()
        .to_string(),
        ParsingError::NotComparable(_, _, _) => r#"
Two discrete variables can only be compared if they have the same set of
possible values.
            "#
        .trim_ascii()
        .to_string(),
        ParsingError::NotPossibleValue(_, _, _) => r#"
A discrete variable can only be compared with one of the values it was defined
with, or with another discrete variable sharing those values.
            "#
        .trim_ascii()
        .to_string(),
    };

    (problem, details)
}
