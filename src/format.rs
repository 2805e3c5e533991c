//! Textual embedding of literals inside a rule.
//!
//! The rules are applied in order:
//!
//! 1. lists are written as `[a, b, ...]`, each element formatted recursively;
//! 2. empty values (see [`Literal::is_empty`]) are written as `""`;
//! 3. strings made only of ASCII digits are written verbatim;
//! 4. strings starting with the placeholder sigil `:` are written verbatim;
//! 5. any other string is written as a single-quoted literal with `\` and `'` escaped.
//!
//! Native integers, decimals and `true` are written as-is, never quoted.
use crate::literal::Literal;
use itertools::Itertools;
use std::fmt::Write;

/// Leading character marking a named parameter reference.
pub const PLACEHOLDER_SIGIL: char = ':';

const EMPTY: &str = r#""""#;

/// Format a literal the way it is embedded inside a rule.
///
/// # Examples
///
/// ```rust
/// use rule_spec::{format_value, Literal};
///
/// assert_eq!(r#""""#, format_value(&Literal::from("")));
/// assert_eq!("42", format_value(&Literal::from("42")));
/// assert_eq!(":points", format_value(&Literal::from(":points")));
/// assert_eq!("'hello'", format_value(&Literal::from("hello")));
/// assert_eq!("[42, 24]", format_value(&Literal::from([42, 24])));
/// ```
pub fn format_value(value: &Literal) -> String {
    value.to_string()
}

pub(crate) fn write_value<W: Write>(output: &mut W, value: &Literal) -> std::fmt::Result {
    if let Literal::List(values) = value {
        output.write_char('[')?;
        write_values(output, values)?;
        return output.write_char(']');
    }

    if value.is_empty() {
        return output.write_str(EMPTY);
    }

    match value {
        Literal::String(value) if is_numeral(value) || is_placeholder(value) => {
            output.write_str(value)
        }
        Literal::String(value) => write_quoted(output, value),
        Literal::Integer(value) => write!(output, "{value}"),
        Literal::Decimal(value) => write!(output, "{value}"),
        Literal::Boolean(value) => write!(output, "{value}"),
        // Null and lists were handled above.
        Literal::Null | Literal::List(_) => output.write_str(EMPTY),
    }
}

/// Write a list of literals separated by `, `, as in function arguments.
pub(crate) fn write_values<W: Write>(output: &mut W, values: &[Literal]) -> std::fmt::Result {
    write!(output, "{}", values.iter().format(", "))
}

#[inline]
fn is_numeral(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

#[inline]
fn is_placeholder(value: &str) -> bool {
    value.starts_with(PLACEHOLDER_SIGIL)
}

fn write_quoted<W: Write>(output: &mut W, value: &str) -> std::fmt::Result {
    output.write_char('\'')?;
    for character in value.chars() {
        if matches!(character, '\'' | '\\') {
            output.write_char('\\')?;
        }
        output.write_char(character)?;
    }
    output.write_char('\'')
}
