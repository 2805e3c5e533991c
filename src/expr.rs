//! Construction of [`Specification`] trees.
//!
//! ```rust
//! use rule_spec::expr;
//!
//! let spec = expr::or_x([
//!     expr::and_x([expr::equals("gender", "F"), expr::more_than("points", 3000)])?,
//!     expr::and_x([expr::equals("gender", "M"), expr::more_than("points", 6000)])?,
//! ])?;
//!
//! assert_eq!(
//!     "((gender = 'F') AND (points > 3000)) OR ((gender = 'M') AND (points > 6000))",
//!     spec.rule()
//! );
//! # Ok::<(), rule_spec::SpecError>(())
//! ```
//!
//! Conjunctions and disjunctions need at least one child and fail with
//! [`SpecError::EmptyComposite`] otherwise. Every other constructor is infallible.
use crate::{
    ast::Specification,
    error::SpecError,
    literal::Literal,
    parameters::Parameters,
    predicates::{FunctionCall, Leaf, Operator},
};

/// Create a conjunction of specifications.
#[inline]
pub fn and_x<I>(specifications: I) -> Result<Specification, SpecError>
where
    I: IntoIterator<Item = Specification>,
{
    Specification::and(specifications)
}

/// Create a disjunction of specifications.
#[inline]
pub fn or_x<I>(specifications: I) -> Result<Specification, SpecError>
where
    I: IntoIterator<Item = Specification>,
{
    Specification::or(specifications)
}

/// Negate a specification.
#[inline]
pub fn not(specification: Specification) -> Specification {
    specification.negate()
}

/// Check that a value equals another value.
pub fn equals(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::Equal, value)
}

/// Check that a value is not equal to another value.
pub fn not_equals(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::NotEqual, value)
}

/// Check that a value strictly equals another value.
pub fn is(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::Is, value)
}

/// Check that a value does not strictly equal another value.
///
/// This is the negation of [`is`], rendered as `NOT (key is value)`.
pub fn is_not(key: &str, value: impl Into<Literal>) -> Specification {
    not(is(key, value))
}

pub fn less_than(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::LessThan, value)
}

pub fn less_than_equal(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::LessThanEqual, value)
}

pub fn more_than(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::GreaterThan, value)
}

pub fn more_than_equal(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::GreaterThanEqual, value)
}

/// Check that a value is in a given list (the `in` operator).
///
/// ```rust
/// use rule_spec::expr;
///
/// assert_eq!("column in [42, 24]", expr::is_in("column", [42, 24]).rule());
/// ```
pub fn is_in(key: &str, value: impl Into<Literal>) -> Specification {
    comparison(key, Operator::In, value)
}

/// Check that a value is not in a given list.
///
/// This is the negation of [`is_in`], rendered as `NOT (key in [...])`.
pub fn not_in(key: &str, value: impl Into<Literal>) -> Specification {
    not(is_in(key, value))
}

/// Call an operator or a function of the rule language.
///
/// Each argument is formatted on its own: strings are quoted, numerals and placeholders are
/// embedded as-is.
///
/// ```rust
/// use rule_spec::{expr, Literal};
///
/// assert_eq!("like('column', 'value')", expr::func("like", ["column", "value"]).rule());
/// assert_eq!(
///     "between('price', :low, 100)",
///     expr::func("between", [Literal::from("price"), Literal::from(":low"), Literal::from(100)])
///         .rule()
/// );
/// ```
pub fn func<I>(name: &str, arguments: I) -> Specification
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let arguments = arguments.into_iter().map(Into::into).collect();
    FunctionCall::new(name, arguments).into()
}

/// Wrap raw rule text and the parameters its placeholders refer to.
///
/// The rule is embedded verbatim: it is neither validated nor escaped.
///
/// ```rust
/// use rule_spec::{expr, Parameters};
///
/// let spec = expr::and_x([
///     expr::generic("points > :min_points", Parameters::from([("min_points", 3000)])),
///     expr::equals("gender", "F"),
/// ])?;
///
/// assert_eq!("(points > :min_points) AND (gender = 'F')", spec.rule());
/// assert_eq!(Parameters::from([("min_points", 3000)]), spec.parameters());
/// # Ok::<(), rule_spec::SpecError>(())
/// ```
pub fn generic(rule: impl Into<String>, parameters: Parameters) -> Specification {
    Leaf::new(rule, parameters).into()
}

#[inline]
fn comparison(key: &str, operator: Operator, value: impl Into<Literal>) -> Specification {
    Leaf::comparison(key, operator, &value.into()).into()
}
