//! Boolean conditions over formulas, such as `x < 3 and colour = red`.

use tracing::debug;

use crate::language::tables::{
    BOOLEAN_CONSTANTS, BOOLEAN_OPERATORS, COMPARISON_OPERATORS, NOT_PREFIX, UNKNOWN_SUFFIX,
};
use crate::language::Decision;
use crate::parsing::parser::{Attempt, Parser, ParsingError};
use crate::parsing::scan::{find_first_operator, find_last_operator, strip_parentheses, Span};

static ARITHMETIC_OPERATORS: &[&str] = &["+", "-", "*", "/", "^"];

impl<'i, 'v> Parser<'i, 'v> {
    /// Parse the entire expression as a decision.
    pub fn parse_decision(&self) -> Result<Decision, ParsingError<'i>> {
        self.recurse_decision(self.whole())
    }

    fn recurse_decision(&self, span: Span) -> Result<Decision, ParsingError<'i>> {
        let span = strip_parentheses(self.original, span);
        if span.is_empty() {
            return Err(ParsingError::EmptyDecision(span.start));
        }

        let text = self.text(span);

        if let Some((_, value)) = BOOLEAN_CONSTANTS
            .iter()
            .find(|(name, _)| *name == text)
        {
            return Ok(Decision::Constant(*value));
        }

        if let Some(decision) = self.parse_boolean(span)? {
            return Ok(decision);
        }
        if let Some(decision) = self.parse_negation(span)? {
            return Ok(decision);
        }
        if let Some(decision) = self.parse_unknown(span)? {
            return Ok(decision);
        }
        if let Some(decision) = self.parse_discrete_comparison(span)? {
            return Ok(decision);
        }
        if let Some(decision) = self.parse_comparison(span)? {
            return Ok(decision);
        }

        Err(ParsingError::InvalidDecision(span.start, text))
    }

    /// Split at the lowest precedence boolean operator present, taking its
    /// last occurrence so that chains group to the left.
    fn parse_boolean(&self, span: Span) -> Attempt<'i, Decision> {
        for (symbol, operator) in BOOLEAN_OPERATORS {
            if let Some(offset) = find_last_operator(self.original, span, symbol) {
                let one = self.recurse_decision(Span::new(span.start, offset))?;
                let two = self.recurse_decision(Span::new(offset + symbol.len(), span.end))?;

                debug!(?operator, "boolean");
                return Ok(Some(Decision::Boolean(
                    *operator,
                    Box::new(one),
                    Box::new(two),
                )));
            }
        }

        Ok(None)
    }

    /// `not <decision>`
    fn parse_negation(&self, span: Span) -> Attempt<'i, Decision> {
        if !self
            .text(span)
            .starts_with(NOT_PREFIX)
        {
            return Ok(None);
        }

        let inner = self.recurse_decision(Span::new(span.start + NOT_PREFIX.len(), span.end))?;
        Ok(Some(Decision::Not(Box::new(inner))))
    }

    /// `<variable> is unknown`
    fn parse_unknown(&self, span: Span) -> Attempt<'i, Decision> {
        if !self
            .text(span)
            .ends_with(UNKNOWN_SUFFIX)
        {
            return Ok(None);
        }

        let reference = Span::new(span.start, span.end - UNKNOWN_SUFFIX.len());
        match self.parse_variable(reference)? {
            Some((variable, index)) => Ok(Some(Decision::ValueUnknown { variable, index })),
            None => Ok(None),
        }
    }

    /// `<discrete variable> = <value>` or `<discrete variable> = <discrete
    /// variable>`. Anything whose left side is not a discrete variable is
    /// left for the numeric comparison.
    fn parse_discrete_comparison(&self, span: Span) -> Attempt<'i, Decision> {
        let text = self.text(span);

        let offset = match text.find('=') {
            Some(offset) => span.start + offset,
            None => return Ok(None),
        };

        let left = Span::new(span.start, offset);

        // arithmetic on the left makes this a numeric comparison
        if ARITHMETIC_OPERATORS
            .iter()
            .any(|symbol| find_first_operator(self.original, left, symbol).is_some())
        {
            return Ok(None);
        }

        let (variable, index) = match self.parse_variable(left)? {
            Some(reference) => reference,
            None => return Ok(None),
        };

        if !self
            .variables
            .is_discrete(variable)
        {
            return Ok(None);
        }

        let right = strip_parentheses(self.original, Span::new(offset + 1, span.end));
        let value = self.text(right);

        if let Some(value) = self
            .variables
            .parse_discrete_value(variable, value)
        {
            return Ok(Some(Decision::DiscreteEquality {
                variable,
                index,
                value,
            }));
        }

        let name = strip_parentheses(self.original, left);
        let name = match self
            .text(name)
            .find('[')
        {
            Some(open) => Span::new(name.start, name.start + open),
            None => name,
        };
        let name = self
            .text(name)
            .trim_end();

        match self.parse_variable(right)? {
            Some((second, second_index))
                if self
                    .variables
                    .is_discrete(second)
                    && self
                        .variables
                        .have_same_values(variable, second) =>
            {
                Ok(Some(Decision::DiscreteVariableEquality {
                    first: variable,
                    first_index: index,
                    second,
                    second_index,
                }))
            }
            Some(_) => Err(ParsingError::NotComparable(span.start, name, value)),
            None => Err(ParsingError::NotPossibleValue(right.start, value, name)),
        }
    }

    /// `<f1> op <f2>` for the numeric comparison operators.
    fn parse_comparison(&self, span: Span) -> Attempt<'i, Decision> {
        for (symbol, comparison) in COMPARISON_OPERATORS {
            if let Some(offset) = find_last_operator(self.original, span, symbol) {
                let one = self.recurse(Span::new(span.start, offset))?;
                let two = self.recurse(Span::new(offset + symbol.len(), span.end))?;

                debug!(?comparison, "comparison");
                return Ok(Some(Decision::Comparison(
                    *comparison,
                    Box::new(one),
                    Box::new(two),
                )));
            }
        }

        Ok(None)
    }
}
