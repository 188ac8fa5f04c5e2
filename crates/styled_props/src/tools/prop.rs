use crate::path::{lookup, resolve_path};
use crate::resolve::resolve_value;
use crate::value::{StyleFn, Value};

/// Read the value at `path` from props, or `default` when it is missing.
///
/// Function values found at the path are returned as they are; use
/// [`deep_prop`] to have them called.
///
/// ```rust
/// use styled_props::{prop, props, Value};
///
/// let color = prop("color.primary", "black");
/// let props = props! { "color": props! { "primary": "red" } };
/// assert_eq!(color.call(&props).unwrap(), Value::from("red"));
/// assert_eq!(color.call(&props! {}).unwrap(), Value::from("black"));
/// ```
pub fn prop(path: impl Into<String>, default: impl Into<Value>) -> StyleFn {
    let path = path.into();
    let default = default.into();
    StyleFn::new(move |props| Ok(resolve_path(props, &path, default.clone())))
}

/// Like [`prop`], but function values are called with the props until they
/// settle, so entries can refer to other entries.
///
/// A key that literally equals `path` (dots included) wins over the nested
/// lookup. The default is returned as given, without being resolved.
pub fn deep_prop(path: impl Into<String>, default: impl Into<Value>) -> StyleFn {
    let path = path.into();
    let default = default.into();
    StyleFn::new(move |props| {
        let flat = props.get(&path).filter(|v| !v.is_undefined());
        match flat.or_else(|| lookup(props, &path)) {
            Some(value) if !value.is_undefined() => resolve_value(value.clone(), props),
            _ => Ok(default.clone()),
        }
    })
}
