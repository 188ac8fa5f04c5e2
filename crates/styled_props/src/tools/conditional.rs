use crate::needle::Needle;
use crate::value::{StyleFn, Value};

/// Pick `pass` when the needle holds and `fail` otherwise.
///
/// An `undefined` branch stands for an omitted one and yields `""`. A function
/// branch is called once with the props; its result is returned as is, even
/// if it is another function.
///
/// ```rust
/// use styled_props::{if_prop, props, Value};
///
/// let border = if_prop("outlined", "1px solid", "none");
/// assert_eq!(border.call(&props! { "outlined": true }).unwrap(), Value::from("1px solid"));
/// assert_eq!(border.call(&props! {}).unwrap(), Value::from("none"));
/// ```
pub fn if_prop(needle: impl Into<Needle>, pass: impl Into<Value>, fail: impl Into<Value>) -> StyleFn {
    let needle = needle.into();
    let pass = or_empty(pass.into());
    let fail = or_empty(fail.into());

    StyleFn::new(move |props| {
        let verdict = needle.evaluate(props)?;
        tracing::trace!(verdict, "if_prop evaluated");
        let chosen = if verdict { &pass } else { &fail };
        match chosen {
            Value::Func(f) => f.call(props),
            value => Ok(value.clone()),
        }
    })
}

/// [`if_prop`] with the branches swapped.
pub fn if_not_prop(needle: impl Into<Needle>, pass: impl Into<Value>, fail: impl Into<Value>) -> StyleFn {
    if_prop(needle, fail, pass)
}

fn or_empty(value: Value) -> Value {
    if value.is_undefined() {
        Value::from("")
    } else {
        value
    }
}
