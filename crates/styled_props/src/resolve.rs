//! Unwinding function values

use crate::error::{Result, StyleError};
use crate::value::Value;

/// Maximum number of nested function calls [`resolve_value`] will follow.
pub const MAX_RESOLVE_DEPTH: usize = 64;

/// Call `value` with `props` until it is no longer a function.
///
/// A function returning another function is fully unwound. Errors raised by
/// the functions propagate unchanged.
pub fn resolve_value(value: Value, props: &Value) -> Result<Value> {
    let mut current = value;
    for _ in 0..MAX_RESOLVE_DEPTH {
        match current {
            Value::Func(f) => current = f.call(props)?,
            settled => return Ok(settled),
        }
    }

    if current.is_function() {
        tracing::warn!(limit = MAX_RESOLVE_DEPTH, "function value did not settle");
        return Err(StyleError::ResolveDepth {
            limit: MAX_RESOLVE_DEPTH,
        });
    }
    Ok(current)
}
