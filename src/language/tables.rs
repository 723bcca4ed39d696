//! Fixed name tables consulted by the parsers and the formatter

use super::types::{Comparison, Constant, DiscreteKind, Kind, Operator};

/// Names as they appear in the function table. This is finer grained than
/// [`Kind`] because `log10` and `log2` are spellings of the general
/// logarithm with a preset base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Name {
    Function(Kind),
    Log10,
    Log2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Unlimited,
}

/// An entry in the standard function table. The prefix includes the opening
/// bracket, which must be closed by the same style at the end of the text.
#[derive(Debug)]
pub struct StandardFunction {
    pub prefix: &'static str,
    pub name: Name,
    pub arity: Arity,
}

const fn unary(prefix: &'static str, kind: Kind) -> StandardFunction {
    StandardFunction {
        prefix,
        name: Name::Function(kind),
        arity: Arity::Exactly(1),
    }
}

const fn binary(prefix: &'static str, kind: Kind) -> StandardFunction {
    StandardFunction {
        prefix,
        name: Name::Function(kind),
        arity: Arity::Exactly(2),
    }
}

const fn variadic(prefix: &'static str, kind: Kind) -> StandardFunction {
    StandardFunction {
        prefix,
        name: Name::Function(kind),
        arity: Arity::Unlimited,
    }
}

const fn preset(prefix: &'static str, name: Name) -> StandardFunction {
    StandardFunction {
        prefix,
        name,
        arity: Arity::Exactly(1),
    }
}

// The first entry for each kind is its canonical spelling, used when
// printing; the second is the square bracket alternative.
pub static STANDARD_FUNCTIONS: &[StandardFunction] = &[
    unary("sqrt(", Kind::SquareRoot),
    unary("Sqrt[", Kind::SquareRoot),
    unary("abs(", Kind::AbsValue),
    unary("Abs[", Kind::AbsValue),
    unary("sign(", Kind::Sign),
    unary("Sign[", Kind::Sign),
    unary("round(", Kind::Round),
    unary("round[", Kind::Round),
    unary("truncate(", Kind::Truncate),
    unary("trunc[", Kind::Truncate),
    preset("log10(", Name::Log10),
    preset("log10[", Name::Log10),
    unary("ln(", Kind::LogE),
    unary("Log[", Kind::LogE),
    preset("log2(", Name::Log2),
    preset("log2[", Name::Log2),
    unary("sin(", Kind::Sine),
    unary("Sin[", Kind::Sine),
    unary("cos(", Kind::Cosine),
    unary("Cos[", Kind::Cosine),
    unary("tan(", Kind::Tangent),
    unary("Tan[", Kind::Tangent),
    unary("arcsin(", Kind::ArcSine),
    unary("ArcSin[", Kind::ArcSine),
    unary("arccos(", Kind::ArcCosine),
    unary("ArcCos[", Kind::ArcCosine),
    unary("arctan(", Kind::ArcTangent),
    unary("ArcTan[", Kind::ArcTangent),
    unary("sinh(", Kind::HypSine),
    unary("Sinh[", Kind::HypSine),
    unary("cosh(", Kind::HypCosine),
    unary("Cosh[", Kind::HypCosine),
    unary("tanh(", Kind::HypTangent),
    unary("Tanh[", Kind::HypTangent),
    unary("arcsinh(", Kind::ArcHypSine),
    unary("ArcSinh[", Kind::ArcHypSine),
    unary("arccosh(", Kind::ArcHypCosine),
    unary("ArcCosh[", Kind::ArcHypCosine),
    unary("arctanh(", Kind::ArcHypTangent),
    unary("ArcTanh[", Kind::ArcHypTangent),
    unary("re(", Kind::RealPart),
    unary("Re[", Kind::RealPart),
    unary("im(", Kind::ImagPart),
    unary("Im[", Kind::ImagPart),
    unary("arg(", Kind::PhaseAngle),
    unary("Arg[", Kind::PhaseAngle),
    unary("conjugate(", Kind::Conjugate),
    unary("Conjugate[", Kind::Conjugate),
    binary("log(", Kind::LogB),
    binary("log[", Kind::LogB),
    binary("arctan2(", Kind::ArcTangent2),
    binary("arctan2[", Kind::ArcTangent2),
    binary("rotate(", Kind::Rotate),
    binary("rotate[", Kind::Rotate),
    variadic("max(", Kind::Max),
    variadic("Max[", Kind::Max),
    variadic("min(", Kind::Min),
    variadic("Min[", Kind::Min),
    variadic("parallel(", Kind::Parallel),
    variadic("parallel[", Kind::Parallel),
];

#[derive(Debug)]
pub struct DiscreteFunction {
    pub prefix: &'static str,
    pub kind: DiscreteKind,
}

pub static DISCRETE_FUNCTIONS: &[DiscreteFunction] = &[
    DiscreteFunction {
        prefix: "index(",
        kind: DiscreteKind::ValueIndex,
    },
    DiscreteFunction {
        prefix: "index[",
        kind: DiscreteKind::ValueIndex,
    },
    DiscreteFunction {
        prefix: "value(",
        kind: DiscreteKind::Value,
    },
    DiscreteFunction {
        prefix: "value[",
        kind: DiscreteKind::Value,
    },
];

/// Named constants, matched case-exactly against the whole text.
pub static NAMED_CONSTANTS: &[(&str, Constant)] = &[
    ("pi", Constant::Pi),
    ("`p", Constant::Pi),
    ("Pi", Constant::Pi),
    ("e", Constant::E),
    ("E", Constant::E),
    ("i", Constant::I),
    ("j", Constant::I),
    ("I", Constant::I),
];

pub static BOOLEAN_CONSTANTS: &[(&str, bool)] = &[("True", true), ("False", false)];

/// Boolean operators, lowest precedence first.
pub static BOOLEAN_OPERATORS: &[(&str, Operator)] = &[
    (" or ", Operator::Or),
    (" xor ", Operator::Xor),
    (" and ", Operator::And),
];

// two character forms must be tried before their one character prefixes
pub static COMPARISON_OPERATORS: &[(&str, Comparison)] = &[
    ("<=", Comparison::LessEqual),
    (">=", Comparison::GreaterEqual),
    ("=", Comparison::Equal),
    ("<", Comparison::LessThan),
    (">", Comparison::GreaterThan),
];

pub const NOT_PREFIX: &str = "not ";
pub const UNKNOWN_SUFFIX: &str = " is unknown";

/// The text standing in for a value the user has yet to enter.
pub const PLACEHOLDER: &str = "?";

/// Marks the following letter as Greek; the only non-letter allowed to
/// start a name.
pub const GREEK_PREFIX: char = '`';

pub const ARGUMENT_SEPARATOR: &str = ",";

pub fn function_prefix(kind: Kind) -> &'static str {
    STANDARD_FUNCTIONS
        .iter()
        .find(|entry| entry.name == Name::Function(kind))
        .map(|entry| entry.prefix)
        .unwrap_or("?(")
}

pub fn discrete_prefix(kind: DiscreteKind) -> &'static str {
    match kind {
        DiscreteKind::Value => "value(",
        DiscreteKind::ValueIndex => "index(",
    }
}

pub fn constant_name(constant: Constant) -> &'static str {
    match constant {
        Constant::Pi => "pi",
        Constant::E => "e",
        Constant::I => "i",
    }
}

pub fn operator_symbol(operator: Operator) -> &'static str {
    match operator {
        Operator::Or => "or",
        Operator::Xor => "xor",
        Operator::And => "and",
    }
}

pub fn comparison_symbol(comparison: Comparison) -> &'static str {
    match comparison {
        Comparison::Equal => "=",
        Comparison::LessThan => "<",
        Comparison::LessEqual => "<=",
        Comparison::GreaterThan => ">",
        Comparison::GreaterEqual => ">=",
    }
}
