//! Assertion failure records.

use std::fmt;

/// One failure produced by running a test.
///
/// Opaque to the post-analysis checks: they count, drop, and construct
/// failures, but never interpret a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        AssertionFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
