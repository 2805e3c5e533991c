use crate::{
    format::write_values,
    literal::Literal,
    parameters::Parameters,
};
use std::fmt::{Display, Formatter, Write};

#[derive(Hash, Eq, PartialEq, Clone, Copy, Debug)]
pub enum Operator {
    Equal,
    NotEqual,
    Is,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    In,
}

impl Operator {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Is => "is",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::In => "in",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// An atomic specification: a rule fragment computed once, plus the parameters it refers to.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Leaf {
    rule: String,
    parameters: Parameters,
}

impl Leaf {
    pub fn new(rule: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            rule: rule.into(),
            parameters,
        }
    }

    /// Build the `key operator value` comparison.
    ///
    /// Parameters are never extracted from `value`: a placeholder such as `:points` is embedded
    /// as-is and the leaf carries no parameters.
    pub fn comparison(key: &str, operator: Operator, value: &Literal) -> Self {
        Self::new(format!("{key} {operator} {value}"), Parameters::new())
    }

    #[inline]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl Display for Leaf {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str(&self.rule)
    }
}

/// A call to an operator or a function of the rule language, e.g. `like('column', 'value')`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct FunctionCall {
    name: String,
    arguments: Vec<Literal>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: Vec<Literal>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arguments(&self) -> &[Literal] {
        &self.arguments
    }
}

impl Display for FunctionCall {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "{}(", self.name)?;
        write_values(formatter, &self.arguments)?;
        formatter.write_char(')')
    }
}
