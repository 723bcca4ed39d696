//! The symbol table capability consumed by the parsers, and a simple
//! in-memory implementation of it.

/// Resolution of names to variables. The parsers only ever read from an
/// implementation of this trait.
pub trait VariableList {
    /// Look up a complete variable name, returning its index.
    fn parse_variable_name(&self, name: &str) -> Option<usize>;

    fn is_numeric(&self, index: usize) -> bool;

    fn is_discrete(&self, index: usize) -> bool;

    /// Whether references to this variable must carry an `[index]`.
    fn is_array(&self, index: usize) -> bool;

    fn variable_name(&self, index: usize) -> &str;

    /// Look up one of the named values of a discrete variable.
    fn parse_discrete_value(&self, _index: usize, _text: &str) -> Option<usize> {
        None
    }

    /// The name of one of a discrete variable's values.
    fn discrete_value_name(&self, _index: usize, _value: usize) -> Option<&str> {
        None
    }

    /// Whether two discrete variables range over the same set of values.
    fn have_same_values(&self, _first: usize, _second: usize) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Numeric(Vec<f64>),
    Discrete {
        names: Vec<String>,
        elements: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub array: bool,
    pub values: Values,
}

/// Variables held in declaration order; a variable's index is its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    entries: Vec<Variable>,
}

impl Variables {
    pub fn new() -> Variables {
        Variables {
            entries: Vec::new(),
        }
    }

    pub fn add_numeric(&mut self, name: &str, value: f64) -> usize {
        self.push(Variable {
            name: name.to_string(),
            array: false,
            values: Values::Numeric(vec![value]),
        })
    }

    pub fn add_numeric_array(&mut self, name: &str, values: Vec<f64>) -> usize {
        self.push(Variable {
            name: name.to_string(),
            array: true,
            values: Values::Numeric(values),
        })
    }

    pub fn add_discrete(&mut self, name: &str, names: Vec<String>) -> usize {
        self.push(Variable {
            name: name.to_string(),
            array: false,
            values: Values::Discrete { names, elements: 1 },
        })
    }

    pub fn add_discrete_array(&mut self, name: &str, elements: usize, names: Vec<String>) -> usize {
        self.push(Variable {
            name: name.to_string(),
            array: true,
            values: Values::Discrete { names, elements },
        })
    }

    fn push(&mut self, variable: Variable) -> usize {
        self.entries
            .push(variable);
        self.entries
            .len()
            - 1
    }

    pub fn get(&self, index: usize) -> Option<&Variable> {
        self.entries
            .get(index)
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.entries
            .iter()
    }
}

impl VariableList for Variables {
    fn parse_variable_name(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|variable| variable.name == name)
    }

    fn is_numeric(&self, index: usize) -> bool {
        matches!(
            self.get(index)
                .map(|variable| &variable.values),
            Some(Values::Numeric(_))
        )
    }

    fn is_discrete(&self, index: usize) -> bool {
        matches!(
            self.get(index)
                .map(|variable| &variable.values),
            Some(Values::Discrete { .. })
        )
    }

    fn is_array(&self, index: usize) -> bool {
        self.get(index)
            .map(|variable| variable.array)
            .unwrap_or(false)
    }

    fn variable_name(&self, index: usize) -> &str {
        self.get(index)
            .map(|variable| variable.name.as_str())
            .unwrap_or("?")
    }

    fn parse_discrete_value(&self, index: usize, text: &str) -> Option<usize> {
        match self.get(index)? {
            Variable {
                values: Values::Discrete { names, .. },
                ..
            } => names
                .iter()
                .position(|name| name == text),
            _ => None,
        }
    }

    fn discrete_value_name(&self, index: usize, value: usize) -> Option<&str> {
        match self.get(index)? {
            Variable {
                values: Values::Discrete { names, .. },
                ..
            } => names
                .get(value)
                .map(|name| name.as_str()),
            _ => None,
        }
    }

    fn have_same_values(&self, first: usize, second: usize) -> bool {
        match (self.get(first), self.get(second)) {
            (
                Some(Variable {
                    values: Values::Discrete { names: one, .. },
                    ..
                }),
                Some(Variable {
                    values: Values::Discrete { names: two, .. },
                    ..
                }),
            ) => one == two,
            _ => false,
        }
    }
}
