use crate::error::SpecError;
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};

/// A value that can be embedded in a rule or bound to a named parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    String(String),
    List(Vec<Literal>),
}

impl Literal {
    /// Whether the value counts as "empty" when it gets embedded in a rule.
    ///
    /// Null, `false`, numeric zero, the empty string, the string `"0"` and the empty list are all
    /// empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Boolean(value) => !value,
            Self::Integer(value) => *value == 0,
            Self::Decimal(value) => value.is_zero(),
            Self::String(value) => value.is_empty() || value == "0",
            Self::List(values) => values.is_empty(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        crate::format::write_value(formatter, self)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Decimal> for Literal {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

macro_rules! integer_literal {
    ($($kind:ty),*) => {
        $(
            impl From<$kind> for Literal {
                fn from(value: $kind) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_literal!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::Decimal(Decimal::from(value)))
    }
}

impl From<usize> for Literal {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

/// Floats convert to decimals.
///
/// Only finite values whose magnitude fits a [`Decimal`] convert: NaN, infinities, magnitudes
/// above [`Decimal::MAX`] (about `7.9e28`) and non-zero values too small to be told apart from
/// zero (below `1e-28`) fail with [`SpecError::UnsupportedValue`].
impl TryFrom<f64> for Literal {
    type Error = SpecError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        match Decimal::try_from(value) {
            Ok(decimal) if decimal.is_zero() && value != 0.0 => Err(unrepresentable_float(value)),
            Ok(decimal) => Ok(Self::Decimal(decimal)),
            Err(_) => Err(unrepresentable_float(value)),
        }
    }
}

impl TryFrom<f32> for Literal {
    type Error = SpecError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        match Decimal::try_from(value) {
            Ok(decimal) if decimal.is_zero() && value != 0.0 => {
                Err(unrepresentable_float(f64::from(value)))
            }
            Ok(decimal) => Ok(Self::Decimal(decimal)),
            Err(_) => Err(unrepresentable_float(f64::from(value))),
        }
    }
}

fn unrepresentable_float(value: f64) -> SpecError {
    SpecError::UnsupportedValue(format!("float {value:e} has no decimal representation"))
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Literal>, const N: usize> From<[T; N]> for Literal {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Literal> + Clone> From<&[T]> for Literal {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Literal>> FromIterator<T> for Literal {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for Literal {
    type Error = SpecError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(value) => Ok(Self::Boolean(value)),
            Value::String(value) => Ok(Self::String(value)),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Ok(Self::Integer(value))
                } else if let Some(value) = number.as_u64() {
                    Ok(Self::from(value))
                } else {
                    let value = number.as_f64().ok_or_else(|| {
                        SpecError::UnsupportedValue(format!("number {number}"))
                    })?;
                    Self::try_from(value)
                }
            }
            Value::Array(values) => values
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(_) => Err(SpecError::UnsupportedValue(
                "objects cannot be embedded in a rule".to_string(),
            )),
        }
    }
}
