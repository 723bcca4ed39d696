//! The recursive descent cascade turning formula text into a [`Function`]
//! tree. Each production looks at a span of the original text and either
//! builds a node, declines with `Ok(None)` so the next production is tried,
//! or fails the whole parse.

use std::fmt;
use tracing::debug;

use crate::language::tables::{
    Arity, Name, ARGUMENT_SEPARATOR, DISCRETE_FUNCTIONS, NAMED_CONSTANTS, PLACEHOLDER,
    STANDARD_FUNCTIONS,
};
use crate::language::{Function, Kind, VariableList};
use crate::parsing::scan::{
    closing_bracket, find_first_operator, find_last_operator, is_exponent_sign,
    strip_parentheses, strip_spaces, Span,
};
use crate::regex::*;

/// Reasons a parse can fail. Each carries the byte offset into the original
/// expression where the offending text begins, along with that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError<'i> {
    EmptyExpression(usize),
    TooFewArguments(usize, &'i str),
    TooManyArguments(usize, &'i str),
    NotDiscrete(usize, &'i str),
    NotNumeric(usize, &'i str),
    IsArray(usize, &'i str),
    NotArray(usize, &'i str),
    NotVariable(usize, &'i str),
    OutOfRange(usize, &'i str),
    InvalidFunction(usize, &'i str),
    EmptyDecision(usize),
    InvalidDecision(usize, &'i str),
    NotComparable(usize, &'i str, &'i str),
    NotPossibleValue(usize, &'i str, &'i str),
}

impl<'i> ParsingError<'i> {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::EmptyExpression(offset) => *offset,
            ParsingError::TooFewArguments(offset, _) => *offset,
            ParsingError::TooManyArguments(offset, _) => *offset,
            ParsingError::NotDiscrete(offset, _) => *offset,
            ParsingError::NotNumeric(offset, _) => *offset,
            ParsingError::IsArray(offset, _) => *offset,
            ParsingError::NotArray(offset, _) => *offset,
            ParsingError::NotVariable(offset, _) => *offset,
            ParsingError::OutOfRange(offset, _) => *offset,
            ParsingError::InvalidFunction(offset, _) => *offset,
            ParsingError::EmptyDecision(offset) => *offset,
            ParsingError::InvalidDecision(offset, _) => *offset,
            ParsingError::NotComparable(offset, _, _) => *offset,
            ParsingError::NotPossibleValue(offset, _, _) => *offset,
        }
    }

    /// How much of the original text the problem covers.
    pub fn width(&self) -> usize {
        match self {
            ParsingError::EmptyExpression(_) | ParsingError::EmptyDecision(_) => 0,
            ParsingError::TooFewArguments(_, text)
            | ParsingError::TooManyArguments(_, text)
            | ParsingError::NotDiscrete(_, text)
            | ParsingError::NotNumeric(_, text)
            | ParsingError::IsArray(_, text)
            | ParsingError::NotArray(_, text)
            | ParsingError::NotVariable(_, text)
            | ParsingError::OutOfRange(_, text)
            | ParsingError::InvalidFunction(_, text)
            | ParsingError::InvalidDecision(_, text)
            | ParsingError::NotPossibleValue(_, text, _) => text.len(),
            ParsingError::NotComparable(_, first, _) => first.len(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::EmptyExpression(_) => "You specified an empty function".to_string(),
            ParsingError::TooFewArguments(_, text) => {
                format!("\"{}\" has too few arguments", text)
            }
            ParsingError::TooManyArguments(_, text) => {
                format!("\"{}\" has too many arguments", text)
            }
            ParsingError::NotDiscrete(_, text) => {
                format!("\"{}\" is not a discrete variable", text)
            }
            ParsingError::NotNumeric(_, text) => {
                format!("\"{}\" is not a numeric variable", text)
            }
            ParsingError::IsArray(_, text) => format!("\"{}\" is an array", text),
            ParsingError::NotArray(_, text) => format!("\"{}\" is not an array", text),
            ParsingError::NotVariable(_, text) => format!("\"{}\" is not a variable", text),
            ParsingError::OutOfRange(_, text) => {
                format!("\"{}\" is too large to be represented.", text)
            }
            ParsingError::InvalidFunction(_, text) => {
                format!("\"{}\" is not a valid function.", text)
            }
            ParsingError::EmptyDecision(_) => "You specified an empty decision".to_string(),
            ParsingError::InvalidDecision(_, text) => {
                format!("\"{}\" is not a valid boolean expression", text)
            }
            ParsingError::NotComparable(_, first, second) => {
                format!("{} cannot be compared with {}", first, second)
            }
            ParsingError::NotPossibleValue(_, value, variable) => {
                format!("\"{}\" is not a possible value of {}", value, variable)
            }
        }
    }
}

impl<'i> fmt::Display for ParsingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of a single production attempt. `Ok(None)` means the production
/// does not apply and the next one should be tried.
pub(crate) type Attempt<'i, T> = Result<Option<T>, ParsingError<'i>>;

/// A variable reference as resolved against the variable list: its index
/// and the array subscript, if one was given.
pub(crate) type Reference = (usize, Option<Box<Function>>);

pub struct Parser<'i, 'v> {
    pub(super) original: &'i str,
    pub(super) variables: &'v dyn VariableList,
    pub(super) allow_placeholder: bool,
}

impl<'i, 'v> Parser<'i, 'v> {
    pub fn new(
        original: &'i str,
        variables: &'v dyn VariableList,
        allow_placeholder: bool,
    ) -> Parser<'i, 'v> {
        Parser {
            original,
            variables,
            allow_placeholder,
        }
    }

    pub(super) fn whole(&self) -> Span {
        Span::new(0, self.original.len())
    }

    pub(super) fn text(&self, span: Span) -> &'i str {
        span.text(self.original)
    }

    /// Parse the entire expression.
    pub fn parse_function(&self) -> Result<Function, ParsingError<'i>> {
        self.recurse(self.whole())
    }

    /// Parse a span as a complete formula, trying each production in order
    /// from lowest precedence to highest.
    pub(super) fn recurse(&self, span: Span) -> Result<Function, ParsingError<'i>> {
        let span = strip_parentheses(self.original, span);
        if span.is_empty() {
            return Err(ParsingError::EmptyExpression(span.start));
        }

        if let Some(function) = self.parse_summation(span)? {
            return Ok(function);
        }

        // product before division, so that x/y*z is (x/y)*z
        if let Some(function) = self.parse_product(span)? {
            return Ok(function);
        }
        if let Some(function) = self.parse_division(span)? {
            return Ok(function);
        }
        if let Some(function) = self.parse_exponentiation(span)? {
            return Ok(function);
        }
        if let Some(function) = self.parse_standard_function(span)? {
            return Ok(function);
        }
        if let Some(function) = self.parse_discrete_function(span)? {
            return Ok(function);
        }
        if let Some(function) = self.parse_named_constant(span) {
            return Ok(function);
        }
        if let Some(function) = self.parse_numeric_variable(span)? {
            return Ok(function);
        }

        let text = self.text(span);

        if self.allow_placeholder && text == PLACEHOLDER {
            return Ok(Function::UserInput);
        }
        if let Some(function) = self.parse_literal(span)? {
            return Ok(function);
        }

        Err(ParsingError::InvalidFunction(span.start, text))
    }

    /// `[+-] f1 + f2 - f3 ...`, with subtraction expressed as negation.
    fn parse_summation(&self, span: Span) -> Attempt<'i, Function> {
        let mut operators: Vec<(char, usize, usize)> = Vec::new();
        let mut last = span.start;

        loop {
            let remainder = Span::new(last, span.end);
            let plus = find_first_operator(self.original, remainder, "+");
            let minus = find_first_operator(self.original, remainder, "-");

            let (sign, offset) = match (plus, minus) {
                (Some(plus), Some(minus)) if plus < minus => ('+', plus),
                (_, Some(minus)) => ('-', minus),
                (Some(plus), None) => ('+', plus),
                (None, None) => break,
            };
            let argument = offset + 1;

            if !is_exponent_sign(self.original, span, offset, argument) {
                operators.push((sign, offset, argument));
            }
            last = argument;
        }

        if operators.is_empty() {
            return Ok(None);
        }

        if operators.len() == 1 && operators[0].1 == span.start {
            let (sign, _, argument) = operators[0];
            let operand = self.recurse(Span::new(argument, span.end))?;

            // a leading + is dropped entirely
            return Ok(Some(match sign {
                '-' => Function::Negation(Box::new(operand)),
                _ => operand,
            }));
        }

        // no operator in front means an implied +
        if operators[0].1 > span.start {
            operators.insert(0, ('+', span.start, span.start));
        }

        // sentinel, so the final operand ends where this begins
        operators.push(('+', span.end, span.end));

        let mut terms = Vec::with_capacity(operators.len() - 1);
        for pair in operators.windows(2) {
            let (sign, _, start) = pair[0];
            let (_, end, _) = pair[1];

            let term = self.recurse(Span::new(start, end))?;
            terms.push(match sign {
                '-' => Function::Negation(Box::new(term)),
                _ => term,
            });
        }

        debug!("summation of {} terms", terms.len());
        Ok(Some(Function::Summation(terms)))
    }

    /// `f1 * f2 * f3 ...`
    fn parse_product(&self, span: Span) -> Attempt<'i, Function> {
        let mut factors = Vec::new();
        let mut last = span.start;

        while let Some(offset) = find_first_operator(self.original, Span::new(last, span.end), "*")
        {
            factors.push(self.recurse(Span::new(last, offset))?);
            last = offset + 1;
        }

        if factors.is_empty() {
            return Ok(None);
        }

        factors.push(self.recurse(Span::new(last, span.end))?);

        debug!("product of {} factors", factors.len());
        Ok(Some(Function::Product(factors)))
    }

    /// `f1 / f2`, split at the last division operator.
    fn parse_division(&self, span: Span) -> Attempt<'i, Function> {
        let offset = match find_last_operator(self.original, span, "/") {
            Some(offset) => offset,
            None => return Ok(None),
        };

        let numerator = self.recurse(Span::new(span.start, offset))?;
        let denominator = self.recurse(Span::new(offset + 1, span.end))?;

        Ok(Some(Function::Division(
            Box::new(numerator),
            Box::new(denominator),
        )))
    }

    /// `f1 ^ f2`, split at the first exponent operator.
    fn parse_exponentiation(&self, span: Span) -> Attempt<'i, Function> {
        let offset = match find_first_operator(self.original, span, "^") {
            Some(offset) => offset,
            None => return Ok(None),
        };

        let base = self.recurse(Span::new(span.start, offset))?;
        let exponent = self.recurse(Span::new(offset + 1, span.end))?;

        Ok(Some(Function::Exponent(Box::new(base), Box::new(exponent))))
    }

    /// Given a span beginning with `prefix` (whose last character is the
    /// opening bracket), return the span between the brackets if the text
    /// ends with the matching closing bracket.
    fn argument_block(&self, span: Span, prefix: &str) -> Option<Span> {
        let text = self.text(span);
        let close = match prefix.as_bytes().last() {
            Some(b'(') => ")",
            Some(b'[') => "]",
            _ => return None,
        };

        if text.len() <= prefix.len() || !text.ends_with(close) {
            return None;
        }

        Some(Span::new(span.start + prefix.len(), span.end - 1))
    }

    /// `name(arg1, arg2, ...)` for the built in functions.
    fn parse_standard_function(&self, span: Span) -> Attempt<'i, Function> {
        let text = self.text(span);

        let entry = match STANDARD_FUNCTIONS
            .iter()
            .filter(|entry| text.starts_with(entry.prefix))
            .max_by_key(|entry| {
                entry
                    .prefix
                    .len()
            }) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let block = match self.argument_block(span, entry.prefix) {
            Some(block) => block,
            None => return Ok(None),
        };

        let mut arguments = Vec::new();

        match entry.arity {
            Arity::Exactly(1) => {
                arguments.push(self.recurse(block)?);
            }
            Arity::Exactly(count) => {
                let mut last = block.start;
                for _ in 1..count {
                    let offset = match find_first_operator(
                        self.original,
                        Span::new(last, block.end),
                        ARGUMENT_SEPARATOR,
                    ) {
                        Some(offset) => offset,
                        None => return Err(ParsingError::TooFewArguments(span.start, text)),
                    };
                    arguments.push(self.recurse(Span::new(last, offset))?);
                    last = offset + ARGUMENT_SEPARATOR.len();
                }

                let remainder = Span::new(last, block.end);
                if find_first_operator(self.original, remainder, ARGUMENT_SEPARATOR).is_some() {
                    return Err(ParsingError::TooManyArguments(span.start, text));
                }
                arguments.push(self.recurse(remainder)?);
            }
            Arity::Unlimited => {
                let mut last = block.start;
                while let Some(offset) = find_first_operator(
                    self.original,
                    Span::new(last, block.end),
                    ARGUMENT_SEPARATOR,
                ) {
                    arguments.push(self.recurse(Span::new(last, offset))?);
                    last = offset + ARGUMENT_SEPARATOR.len();
                }
                arguments.push(self.recurse(Span::new(last, block.end))?);
            }
        }

        let function = match entry.name {
            Name::Function(kind) => Function::Standard { kind, arguments },
            Name::Log10 => {
                arguments.insert(0, Function::Constant(10.0));
                Function::Standard {
                    kind: Kind::LogB,
                    arguments,
                }
            }
            Name::Log2 => {
                arguments.insert(0, Function::Constant(2.0));
                Function::Standard {
                    kind: Kind::LogB,
                    arguments,
                }
            }
        };

        debug!(prefix = entry.prefix, "standard function");
        Ok(Some(function))
    }

    /// `value(d)` or `index(d)` where `d` is a discrete variable.
    fn parse_discrete_function(&self, span: Span) -> Attempt<'i, Function> {
        let text = self.text(span);

        let entry = match DISCRETE_FUNCTIONS
            .iter()
            .find(|entry| text.starts_with(entry.prefix))
        {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let block = match self.argument_block(span, entry.prefix) {
            Some(block) => block,
            None => return Ok(None),
        };

        match self.parse_variable(block)? {
            Some((variable, index)) if self.variables.is_discrete(variable) => {
                Ok(Some(Function::Discrete {
                    kind: entry.kind,
                    variable,
                    index,
                }))
            }
            _ => {
                let argument = strip_spaces(self.original, block);
                Err(ParsingError::NotDiscrete(
                    argument.start,
                    self.text(argument),
                ))
            }
        }
    }

    fn parse_named_constant(&self, span: Span) -> Option<Function> {
        let text = self.text(span);

        NAMED_CONSTANTS
            .iter()
            .find(|(name, _)| *name == text)
            .map(|(_, constant)| Function::NamedConstant(*constant))
    }

    fn parse_numeric_variable(&self, span: Span) -> Attempt<'i, Function> {
        match self.parse_variable(span)? {
            Some((variable, index)) if self.variables.is_numeric(variable) => {
                Ok(Some(Function::Variable { variable, index }))
            }
            Some(_) => Err(ParsingError::NotNumeric(span.start, self.text(span))),
            None => Ok(None),
        }
    }

    /// Resolve `name` or `name[index]` against the variable list. An unknown
    /// name is only an error if it was given a subscript.
    pub(super) fn parse_variable(&self, span: Span) -> Attempt<'i, Reference> {
        let span = strip_parentheses(self.original, span);
        let text = self.text(span);

        let mut name = span;
        let mut index = None;

        // a subscript is only taken when the first block runs to the end
        if let Some(open) = text.find('[') {
            if text.ends_with(']')
                && closing_bracket(self.original, span, span.start + open) == Some(span.end - 1)
            {
                let subscript = Span::new(span.start + open + 1, span.end - 1);
                index = Some(Box::new(self.recurse(subscript)?));
                name = Span::new(span.start, span.start + open);
            }
        }

        let name = strip_spaces(self.original, name);
        let label = self.text(name);

        match self
            .variables
            .parse_variable_name(label)
        {
            Some(variable) => {
                let array = self
                    .variables
                    .is_array(variable);
                if array && index.is_none() {
                    Err(ParsingError::IsArray(name.start, label))
                } else if !array && index.is_some() {
                    Err(ParsingError::NotArray(name.start, label))
                } else {
                    Ok(Some((variable, index)))
                }
            }
            None if index.is_some() => Err(ParsingError::NotVariable(name.start, label)),
            None => Ok(None),
        }
    }

    /// A decimal number, optionally followed by `%`.
    fn parse_literal(&self, span: Span) -> Attempt<'i, Function> {
        let text = self.text(span);

        let (number, percentage) = match text.strip_suffix('%') {
            Some(_) => (
                strip_spaces(self.original, Span::new(span.start, span.end - 1)),
                true,
            ),
            None => (span, false),
        };

        let digits = self.text(number);
        if !regex!(r"^([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").is_match(digits) {
            return Ok(None);
        }

        let value: f64 = match digits.parse() {
            Ok(value) => value,
            Err(_) => return Ok(None),
        };

        if value.is_infinite() {
            return Err(ParsingError::OutOfRange(span.start, text));
        }

        Ok(Some(Function::Constant(if percentage {
            value / 100.0
        } else {
            value
        })))
    }
}
