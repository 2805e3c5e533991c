//! Composable predicate expressions rendered to a backend-agnostic rule and a mapping of named
//! parameters.
//!
//! The rule is meant to be compiled further by a separate backend (SQL, in-memory filters, search
//! engine queries, ...). This crate only builds the expression tree and serializes it.
//!
//! # Examples
//!
//! Building a specification:
//!
//! ```
//! use rule_spec::{expr, Parameters};
//!
//! let spec = expr::and_x([
//!     expr::equals("gender", "F"),
//!     expr::more_than("points", 3000),
//!     expr::generic("city = :city", Parameters::from([("city", "Montréal")])),
//! ])?;
//!
//! assert_eq!(
//!     "(gender = 'F') AND (points > 3000) AND (city = :city)",
//!     rule_spec::render(&spec)
//! );
//! assert_eq!(
//!     Parameters::from([("city", "Montréal")]),
//!     rule_spec::parameters(&spec)
//! );
//! # Ok::<(), rule_spec::SpecError>(())
//! ```
//!
//! # Rendering
//!
//! * Comparisons render as `key operator value`, with the operators `=`, `!=`, `is`, `<`, `<=`,
//!   `>`, `>=` and `in`;
//! * Function calls render as `name(argument, ...)`;
//! * Conjunctions and disjunctions wrap every child in parentheses and join them with `AND` or
//!   `OR`, e.g. `(a) AND (b)`;
//! * Negations render as `NOT (a)`. `is_not` and `not_in` are negations of `is` and `is_in`.
//!
//! Values are embedded following the rules of [`format_value`]: strings are single-quoted,
//! numbers and digit-only strings are written as-is, and strings starting with `:` are kept as
//! named placeholders.
//!
//! # Parameters
//!
//! The parameters of a composite are the parameters of its children merged from left to right.
//! When two children bind the same name, the right-most value silently wins: use distinct names
//! for distinct parameters.
//!
//! # Features
//!
//! * `serde`: serialize [`Literal`] and [`Parameters`], and convert `serde_json::Value` into
//!   [`Literal`].
mod ast;
mod error;
pub mod expr;
mod format;
mod literal;
mod parameters;
mod predicates;
#[cfg(test)]
mod test_utils;

pub use crate::{
    ast::{Children, Connective, Specification},
    error::SpecError,
    format::{format_value, PLACEHOLDER_SIGIL},
    literal::Literal,
    parameters::Parameters,
    predicates::{FunctionCall, Leaf, Operator},
};

/// Render the fully parenthesized rule of a specification.
#[inline]
pub fn render(specification: &Specification) -> String {
    specification.rule()
}

/// Collect the parameters of a whole specification tree.
#[inline]
pub fn parameters(specification: &Specification) -> Parameters {
    specification.parameters()
}
