//! Formatter printing formulas and decisions as canonical text. Parentheses
//! are only inserted where the parser would otherwise build a different
//! tree, so formatted output parses back to the tree it came from.

use crate::formatting::*;
use crate::language::tables::{
    comparison_symbol, constant_name, discrete_prefix, function_prefix, operator_symbol,
    PLACEHOLDER,
};
use crate::language::*;

pub fn format_function(
    function: &Function,
    variables: &dyn VariableList,
) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new(variables);
    output.format_function(function);
    output.fragments
}

pub fn format_decision(
    decision: &Decision,
    variables: &dyn VariableList,
) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new(variables);
    output.format_decision(decision);
    output.fragments
}

// An operand is wrapped in parentheses when its binding is at or below the
// threshold of the position it is printed in.
const TERM: u8 = 2;
const NEGATED: u8 = 2;
const FACTOR: u8 = 3;
const NUMERATOR: u8 = 3;
const DENOMINATOR: u8 = 4;
const POWER: u8 = 4;
const BASE: u8 = 5;

/// How tightly a node holds together when printed without parentheses.
fn binding(function: &Function) -> u8 {
    match function {
        Function::Summation(_) => 1,
        Function::Negation(_) => 2,
        Function::Constant(value) if value.is_sign_negative() => 2,
        Function::Product(_) => 3,
        Function::Division(_, _) => 4,
        Function::Exponent(_, _) => 5,
        _ => 6,
    }
}

fn decision_binding(decision: &Decision) -> u8 {
    match decision {
        Decision::Boolean(Operator::Or, _, _) => 1,
        Decision::Boolean(Operator::Xor, _, _) => 2,
        Decision::Boolean(Operator::And, _, _) => 3,
        Decision::Not(_) => 4,
        _ => 5,
    }
}

struct Formatter<'v> {
    fragments: Vec<(Syntax, String)>,
    variables: &'v dyn VariableList,
}

impl<'v> Formatter<'v> {
    fn new(variables: &'v dyn VariableList) -> Formatter<'v> {
        Formatter {
            fragments: Vec::new(),
            variables,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_operand(&mut self, function: &Function, threshold: u8) {
        if binding(function) <= threshold {
            self.append(Syntax::Structure, "(");
            self.format_function(function);
            self.append(Syntax::Structure, ")");
        } else {
            self.format_function(function);
        }
    }

    fn format_function(&mut self, function: &Function) {
        match function {
            Function::Summation(terms) => {
                for (i, term) in terms
                    .iter()
                    .enumerate()
                {
                    match term {
                        Function::Negation(inner) => {
                            self.append(Syntax::Operator, if i == 0 { "-" } else { " - " });
                            self.format_operand(inner, NEGATED);
                        }
                        _ => {
                            if i > 0 {
                                self.append(Syntax::Operator, " + ");
                            }
                            self.format_operand(term, TERM);
                        }
                    }
                }
            }
            Function::Negation(inner) => {
                self.append(Syntax::Operator, "-");
                self.format_operand(inner, NEGATED);
            }
            Function::Product(factors) => {
                for (i, factor) in factors
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        self.append(Syntax::Operator, "*");
                    }
                    self.format_operand(factor, FACTOR);
                }
            }
            Function::Division(numerator, denominator) => {
                self.format_operand(numerator, NUMERATOR);
                self.append(Syntax::Operator, "/");
                self.format_operand(denominator, DENOMINATOR);
            }
            Function::Exponent(base, exponent) => {
                self.format_operand(base, BASE);
                self.append(Syntax::Operator, "^");
                self.format_operand(exponent, POWER);
            }
            Function::Standard { kind, arguments } => {
                let prefix = function_prefix(*kind);
                self.append(Syntax::Function, &prefix[..prefix.len() - 1]);
                self.append(Syntax::Structure, "(");
                for (i, argument) in arguments
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        self.append(Syntax::Structure, ", ");
                    }
                    self.format_function(argument);
                }
                self.append(Syntax::Structure, ")");
            }
            Function::Discrete {
                kind,
                variable,
                index,
            } => {
                let prefix = discrete_prefix(*kind);
                self.append(Syntax::Function, &prefix[..prefix.len() - 1]);
                self.append(Syntax::Structure, "(");
                self.format_reference(*variable, index.as_deref());
                self.append(Syntax::Structure, ")");
            }
            Function::Variable { variable, index } => {
                self.format_reference(*variable, index.as_deref());
            }
            Function::NamedConstant(constant) => {
                self.append(Syntax::Constant, constant_name(*constant));
            }
            Function::Constant(value) => {
                self.append(Syntax::Numeric, &value.to_string());
            }
            Function::UserInput => {
                self.append(Syntax::Placeholder, PLACEHOLDER);
            }
        }
    }

    fn format_reference(&mut self, variable: usize, index: Option<&Function>) {
        let name = self
            .variables
            .variable_name(variable)
            .to_string();
        self.append(Syntax::Variable, &name);

        if let Some(index) = index {
            self.append(Syntax::Structure, "[");
            self.format_function(index);
            self.append(Syntax::Structure, "]");
        }
    }

    fn format_condition(&mut self, decision: &Decision, threshold: u8) {
        if decision_binding(decision) <= threshold {
            self.append(Syntax::Structure, "(");
            self.format_decision(decision);
            self.append(Syntax::Structure, ")");
        } else {
            self.format_decision(decision);
        }
    }

    fn format_decision(&mut self, decision: &Decision) {
        match decision {
            Decision::Constant(value) => {
                self.append(Syntax::Keyword, if *value { "True" } else { "False" });
            }
            Decision::Boolean(operator, one, two) => {
                // chains of the same operator group to the left
                let level = decision_binding(decision);
                self.format_condition(one, level - 1);
                self.append(Syntax::Keyword, &format!(" {} ", operator_symbol(*operator)));
                self.format_condition(two, level);
            }
            Decision::Not(inner) => {
                self.append(Syntax::Keyword, "not ");
                self.format_condition(inner, 3);
            }
            Decision::ValueUnknown { variable, index } => {
                self.format_reference(*variable, index.as_deref());
                self.append(Syntax::Keyword, " is unknown");
            }
            Decision::DiscreteEquality {
                variable,
                index,
                value,
            } => {
                self.format_reference(*variable, index.as_deref());
                self.append(Syntax::Operator, " = ");

                let name = match self
                    .variables
                    .discrete_value_name(*variable, *value)
                {
                    Some(name) => name.to_string(),
                    None => value.to_string(),
                };
                self.append(Syntax::Value, &name);
            }
            Decision::DiscreteVariableEquality {
                first,
                first_index,
                second,
                second_index,
            } => {
                self.format_reference(*first, first_index.as_deref());
                self.append(Syntax::Operator, " = ");
                self.format_reference(*second, second_index.as_deref());
            }
            Decision::Comparison(comparison, one, two) => {
                self.format_function(one);
                self.append(
                    Syntax::Operator,
                    &format!(" {} ", comparison_symbol(*comparison)),
                );
                self.format_function(two);
            }
        }
    }
}
