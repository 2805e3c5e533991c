use crate::ast::Connective;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("{0} composite requires at least one child specification")]
    EmptyComposite(Connective),
    #[error("value has no literal representation: {0}")]
    UnsupportedValue(String),
}
