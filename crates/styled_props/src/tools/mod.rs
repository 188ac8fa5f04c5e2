//! Style function factories
//!
//! Each factory captures its arguments and returns a [`StyleFn`](crate::StyleFn)
//! to be called later with the live props:
//! - [`prop`] / [`deep_prop`]: read a value at a dot path
//! - [`theme`] / [`deep_theme`]: the same, scoped to `props.theme`
//! - [`if_prop`] / [`if_not_prop`]: pick between two values on a needle
//! - [`switch_prop`]: pick a case by the value at a path
//! - [`palette`]: pick a tone from `props.theme.palette`
//! - [`with_prop`]: feed resolved values to a callback

mod conditional;
mod palette;
mod prop;
mod switch;
mod theme;
mod with;

pub use conditional::*;
pub use palette::*;
pub use prop::*;
pub use switch::*;
pub use theme::*;
pub use with::*;
