//! Types representing an Abstract Syntax Tree for formulas and decisions

use serde::Serialize;

/// A parsed formula. Every node owns its operands outright, so a tree is
/// released in full whenever its root is dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Function {
    Summation(Vec<Function>),
    Negation(Box<Function>),
    Product(Vec<Function>),
    Division(Box<Function>, Box<Function>),
    Exponent(Box<Function>, Box<Function>),
    Standard {
        kind: Kind,
        arguments: Vec<Function>,
    },
    Discrete {
        kind: DiscreteKind,
        variable: usize,
        index: Option<Box<Function>>,
    },
    Variable {
        variable: usize,
        index: Option<Box<Function>>,
    },
    NamedConstant(Constant),
    Constant(f64),
    // placeholder awaiting interactive entry
    UserInput,
}

impl Function {
    /// Count of nodes in this tree, including this one.
    pub fn size(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| child.size())
            .sum::<usize>()
    }

    /// The direct operands of this node, in order.
    pub fn children(&self) -> Vec<&Function> {
        match self {
            Function::Summation(terms) | Function::Product(terms) => terms
                .iter()
                .collect(),
            Function::Negation(arg) => vec![&**arg],
            Function::Division(one, two) | Function::Exponent(one, two) => vec![&**one, &**two],
            Function::Standard { arguments, .. } => arguments
                .iter()
                .collect(),
            Function::Discrete { index, .. } | Function::Variable { index, .. } => index
                .iter()
                .map(|boxed| &**boxed)
                .collect(),
            Function::NamedConstant(_) | Function::Constant(_) | Function::UserInput => vec![],
        }
    }
}

/// The concrete kinds of standard function node. Several spellings in the
/// name tables can build the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kind {
    SquareRoot,
    AbsValue,
    Sign,
    Round,
    Truncate,
    LogE,
    LogB,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    HypSine,
    HypCosine,
    HypTangent,
    ArcHypSine,
    ArcHypCosine,
    ArcHypTangent,
    RealPart,
    ImagPart,
    PhaseAngle,
    Conjugate,
    ArcTangent2,
    Rotate,
    Max,
    Min,
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscreteKind {
    Value,
    ValueIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Constant {
    Pi,
    E,
    I,
}

// now types for boolean conditions

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Decision {
    Constant(bool),
    Boolean(Operator, Box<Decision>, Box<Decision>),
    Not(Box<Decision>),
    ValueUnknown {
        variable: usize,
        index: Option<Box<Function>>,
    },
    DiscreteEquality {
        variable: usize,
        index: Option<Box<Function>>,
        value: usize,
    },
    DiscreteVariableEquality {
        first: usize,
        first_index: Option<Box<Function>>,
        second: usize,
        second_index: Option<Box<Function>>,
    },
    Comparison(Comparison, Box<Function>, Box<Function>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Or,
    Xor,
    And,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparison {
    Equal,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
}
