use serde::{Deserialize, Serialize};

/// A named list of values to be averaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Outcome of averaging one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub name: String,
    pub values: Vec<f64>,
    pub average: f64,
}

/// Error raised when textual input cannot be turned into numbers.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("argument {position} is not a number: {token:?}")]
    NotANumber { position: usize, token: String },
}

pub type ParseResult<T> = Result<T, ParseError>;
