use crate::error::Result;
use crate::value::Value;

/// Host-boundary record of an operation's outcome: the two-slot
/// (error-or-null, result-or-null) convention. No operation both errors and
/// returns a result.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Completion {
    pub error: Option<String>,
    pub result: Option<Value>,
}

impl Completion {
    pub fn ok(result: Option<Value>) -> Self {
        Self {
            error: None,
            result,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            result: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<Result<Option<Value>>> for Completion {
    fn from(outcome: Result<Option<Value>>) -> Self {
        match outcome {
            Ok(result) => Completion::ok(result),
            Err(e) => Completion::err(e.to_string()),
        }
    }
}

impl From<Result<()>> for Completion {
    fn from(outcome: Result<()>) -> Self {
        Completion::from(outcome.map(|()| None))
    }
}
