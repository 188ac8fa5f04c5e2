use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::needle::{FieldTest, Needle};
use crate::path::resolve_path;
use crate::value::{Map, StyleFn, Value};

/// Resolve the needles to values and hand them to `f` as positional
/// arguments.
///
/// - a list needle passes one argument per item, in order; a nested list
///   contributes its first resolved value
/// - a predicate needle passes its return value
/// - a field needle passes a copy of the props keeping only the top-level
///   keys whose test holds (a predicate applied to the prop, or the
///   truthiness of a literal)
/// - a path needle passes the value at that path
///
/// ```rust
/// use styled_props::{props, with_prop, Value};
///
/// let size = with_prop(["width", "unit"], |args| {
///     Ok(format!("{}{}", args[0], args[1]).into())
/// });
/// assert_eq!(size.call(&props! { "width": 4, "unit": "px" }).unwrap(), Value::from("4px"));
/// ```
pub fn with_prop<F>(needles: impl Into<Needle>, f: F) -> StyleFn
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
{
    let needle = needles.into();
    StyleFn::new(move |props| {
        let args = match &needle {
            Needle::List(items) => items
                .iter()
                .map(|item| resolve_needle(item, props))
                .collect::<Result<Vec<_>>>()?,
            other => vec![resolve_needle(other, props)?],
        };
        f(&args)
    })
}

fn resolve_needle(needle: &Needle, props: &Value) -> Result<Value> {
    match needle {
        Needle::Path(path) => Ok(resolve_path(props, path, Value::Undefined)),
        Needle::Predicate(f) => f.call(props),
        Needle::Fields(fields) => filter_props(fields, props),
        Needle::List(items) => {
            let mut first = None;
            for item in items {
                let value = resolve_needle(item, props)?;
                first.get_or_insert(value);
            }
            Ok(first.unwrap_or_default())
        }
    }
}

fn filter_props(fields: &[(String, FieldTest)], props: &Value) -> Result<Value> {
    let mut keep: FxHashMap<&str, bool> = FxHashMap::default();
    for (key, test) in fields {
        let pass = match test {
            FieldTest::Test(f) => f.call(&resolve_path(props, key, Value::Undefined))?.is_truthy(),
            FieldTest::Equals(value) => value.is_truthy(),
        };
        keep.insert(key.as_str(), pass);
    }

    let filtered: Map = props
        .as_map()
        .map(|map| {
            map.iter()
                .filter(|(key, _)| keep.get(key.as_str()).copied().unwrap_or(false))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default();
    Ok(Value::from(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;
    use pretty_assertions::assert_eq;

    fn is_foo(args: &[Value]) -> Result<Value> {
        Ok(args[0].strict_eq(&Value::from("foo")).into())
    }

    fn collect(args: &[Value]) -> Result<Value> {
        Ok(Value::list(args.iter().cloned()))
    }

    #[test]
    fn path_needles() {
        let run = |needle: &str, props: Value| with_prop(needle, is_foo).call(&props).unwrap();
        assert_eq!(run("type", props! {}), Value::Bool(false));
        assert_eq!(run("type", props! { "type": "bar" }), Value::Bool(false));
        assert_eq!(run("type", props! { "type": "foo" }), Value::Bool(true));
        assert_eq!(run("foo.bar", props! {}), Value::Bool(false));
        assert_eq!(run("foo.bar", props! { "foo": props! {} }), Value::Bool(false));
        assert_eq!(run("foo.bar", props! { "foo": props! { "bar": "bar" } }), Value::Bool(false));
        assert_eq!(run("foo.bar", props! { "foo": props! { "bar": "foo" } }), Value::Bool(true));
    }

    #[test]
    fn list_needles_pass_positional_args() {
        let run = |props: Value| with_prop(["foo", "bar"], collect).call(&props).unwrap();
        let u = Value::Undefined;
        assert_eq!(run(props! {}), Value::list([u.clone(), u.clone()]));
        assert_eq!(run(props! { "foo": "foo" }), Value::list([Value::from("foo"), u.clone()]));
        assert_eq!(run(props! { "bar": "bar" }), Value::list([u, Value::from("bar")]));
        assert_eq!(
            run(props! { "bar": "bar", "foo": "foo" }),
            Value::list(["foo", "bar"])
        );
    }

    #[test]
    fn function_needles() {
        let by_type = Needle::predicate(|p| Ok(p.get("type").cloned().unwrap_or_default()));
        let run = |props: Value| with_prop(by_type.clone(), is_foo).call(&props).unwrap();
        assert_eq!(run(props! {}), Value::Bool(false));
        assert_eq!(run(props! { "type": "bar" }), Value::Bool(false));
        assert_eq!(run(props! { "type": "foo" }), Value::Bool(true));
    }

    #[test]
    fn field_needles_filter_props() {
        let needle = Needle::fields([
            ("size", FieldTest::test(|v| Ok((v.as_number().unwrap_or(0.0) > 2.0).into()))),
            ("color", FieldTest::from(true)),
            ("hidden", FieldTest::from(false)),
        ]);
        let out = with_prop(needle, |args| Ok(args[0].clone()))
            .call(&props! { "color": "red", "size": 4, "hidden": true, "extra": 1 })
            .unwrap();
        assert_eq!(out, props! { "color": "red", "size": 4 });
    }

    #[test]
    fn nested_lists_contribute_first_value() {
        let needle = Needle::all([Needle::all(["a", "b"]), Needle::path("c")]);
        let out = with_prop(needle, collect)
            .call(&props! { "a": 1, "b": 2, "c": 3 })
            .unwrap();
        assert_eq!(out, Value::list([1, 3]));
    }

    #[test]
    fn callback_errors_propagate() {
        let out = with_prop("x", |_| Err(crate::StyleError::callback("bad"))).call(&props! {});
        assert!(out.is_err());
    }
}
