use std::sync::Arc;

use crate::error::Result;
use crate::needle::Needle;
use crate::path::resolve_path;
use crate::value::{Map, StyleFn, Value};

/// The case table of a [`switch_prop`]: fixed, or computed from props on
/// every call.
#[derive(Clone, Debug)]
pub enum Cases {
    Table(Arc<Map>),
    Computed(StyleFn),
}

impl Cases {
    /// A computed table. The function should return a map; anything else
    /// behaves like an empty table.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Computed(StyleFn::new(f))
    }

    fn table(&self, props: &Value) -> Result<Arc<Map>> {
        match self {
            Self::Table(map) => Ok(Arc::clone(map)),
            Self::Computed(f) => match f.call(props)? {
                Value::Map(map) => Ok(map),
                other => {
                    tracing::trace!(kind = other.kind(), "computed cases are not a map");
                    Ok(Arc::default())
                }
            },
        }
    }
}

impl From<Map> for Cases {
    fn from(map: Map) -> Self {
        Self::Table(Arc::new(map))
    }
}

impl From<StyleFn> for Cases {
    fn from(f: StyleFn) -> Self {
        Self::Computed(f)
    }
}

impl From<Value> for Cases {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(map) => Self::Table(map),
            Value::Func(f) => Self::Computed(f),
            _ => Self::Table(Arc::default()),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Cases
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self::from(Value::map(entries))
    }
}

/// Pick a case by the value the needle points at.
///
/// A predicate needle is called with the props; a path needle is resolved
/// against them. List and field needles name no single value, so they only
/// ever reach `default_case`. Matching entries are returned unchanged: a
/// function entry is not called.
///
/// ```rust
/// use styled_props::{props, switch_prop, Value};
///
/// let color = switch_prop("type", [("blue", "#00f"), ("red", "#f00")], "green");
/// assert_eq!(color.call(&props! { "type": "red" }).unwrap(), Value::from("#f00"));
/// assert_eq!(color.call(&props! { "type": "purple" }).unwrap(), Value::from("green"));
/// ```
pub fn switch_prop(
    needle: impl Into<Needle>,
    cases: impl Into<Cases>,
    default_case: impl Into<Value>,
) -> StyleFn {
    let needle = needle.into();
    let cases = cases.into();
    let default_case = default_case.into();

    StyleFn::new(move |props| {
        let value = match &needle {
            Needle::Predicate(f) => f.call(props)?,
            Needle::Path(path) => resolve_path(props, path, Value::Undefined),
            Needle::List(_) | Needle::Fields(_) => Value::Undefined,
        };
        let table = cases.table(props)?;

        if let Some(entry) = value.property_key().and_then(|key| table.get(&*key)) {
            return Ok(entry.clone());
        }
        tracing::trace!(kind = value.kind(), "no matching case");
        Ok(default_case.clone())
    })
}
