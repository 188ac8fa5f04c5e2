//! Styled Props
//!
//! Small resolvers that turn component props into style values inside
//! template interpolations.
//!
//! # Overview
//!
//! Every factory returns a [`StyleFn`]: a function of props that is built
//! once and called on every render.
//!
//! - **Props**: [`prop`] and [`deep_prop`] read a value at a dot path
//! - **Theme**: [`theme`] and [`deep_theme`] read from `props.theme`
//! - **Conditions**: [`if_prop`], [`if_not_prop`] and [`switch_prop`]
//! - **Palettes**: [`palette`] picks a tone from `props.theme.palette`
//! - **Composition**: [`with_prop`] hands resolved props to a callback
//!
//! # Quick Start
//!
//! ```rust
//! use styled_props::{if_prop, palette, props, Value};
//!
//! let color = if_prop("transparent", "transparent", palette("primary", 0, ()));
//!
//! let props = props! {
//!     "theme": props! { "palette": props! { "primary": ["#1976d2", "#2196f3"] } },
//! };
//! assert_eq!(color.call(&props).unwrap(), Value::from("#1976d2"));
//! ```
//!
//! # Needles
//!
//! Conditions are expressed as a [`Needle`]: a path, a predicate, a list of
//! needles that must all pass, or a set of per-field expectations.
//!
//! # Themes from config
//!
//! [`ThemeConfig`] loads a theme from TOML or JSON, and [`props_with_theme`]
//! attaches it to a props object.

mod config;
mod error;
mod needle;
mod path;
mod resolve;
mod tools;
mod value;

pub use config::{props_with_theme, ConfigError, ThemeConfig};
pub use error::{Result, StyleError};
pub use needle::{FieldTest, Needle};
pub use path::{lookup, resolve_path, split_path};
pub use resolve::{resolve_value, MAX_RESOLVE_DEPTH};
pub use tools::*;
pub use value::{is_truthy, Map, StyleFn, Value};

/// Build a props map from `"key": value` pairs.
///
/// Values go through `Value::from`, so plain strings, numbers, bools,
/// arrays and nested `props!` maps can be written inline.
///
/// ```rust
/// use styled_props::{props, Value};
///
/// let props = props! { "size": 4, "theme": props! { "dark": true } };
/// assert_eq!(props.get("size"), Some(&Value::from(4)));
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::Value::Map(::std::sync::Arc::new($crate::Map::default()))
    };
    ($($key:literal : $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::default();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        $crate::Value::Map(::std::sync::Arc::new(map))
    }};
}
