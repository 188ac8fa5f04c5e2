use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced while evaluating style functions.
///
/// Missing props, palette keys and case matches are not errors; they resolve
/// to [`Value::Undefined`](crate::Value::Undefined) or the supplied default.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A caller-supplied function failed.
    #[error("style callback failed: {0}")]
    Callback(String),

    /// A chain of function values did not settle on a plain value.
    #[error("value did not resolve after {limit} nested function calls")]
    ResolveDepth { limit: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StyleError {
    /// Wrap a failure raised inside a callback.
    pub fn callback(msg: impl std::fmt::Display) -> Self {
        Self::Callback(msg.to_string())
    }
}

pub type Result<T, E = StyleError> = std::result::Result<T, E>;
