use crate::tools::prop::{deep_prop, prop};
use crate::value::{StyleFn, Value};

/// [`prop`] scoped to `props.theme`.
///
/// A missing theme behaves like an empty one and yields `default`.
pub fn theme(path: impl Into<String>, default: impl Into<Value>) -> StyleFn {
    let inner = prop(path, default);
    StyleFn::new(move |props| match props.get("theme") {
        Some(theme) => inner.call(theme),
        None => inner.call(&Value::Undefined),
    })
}

/// [`deep_prop`] scoped to `props.theme`.
///
/// Function entries are called with the full props, not just the theme, so a
/// theme entry can itself be `deep_theme("other.entry", ())`.
pub fn deep_theme(path: impl Into<String>, default: impl Into<Value>) -> StyleFn {
    deep_prop(format!("theme.{}", path.into()), default)
}
