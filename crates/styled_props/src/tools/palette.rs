use crate::resolve::resolve_value;
use crate::value::{StyleFn, Value};

/// Pick a tone from `props.theme.palette`.
///
/// The three arguments are read by their runtime kind, so one factory covers
/// every call shape (`undefined` marks an omitted argument):
///
/// | call | reads |
/// |---|---|
/// | `palette(1, (), ())` | `palette[props.palette][1]` |
/// | `palette("primary", (), ())` | `palette.primary[props.tone or 0]` |
/// | `palette("primary", -1, ())` | last tone of `palette.primary` |
/// | `palette("primary", 0, "red")` | `palette.primary[0]`, or `"red"` |
/// | `palette("primary", "red", ())` | `palette.primary[props.tone or 0]`, or `"red"` |
///
/// Resolution:
/// - key: `key_or_tone` when it is a string, else `props.palette`
/// - tone: `key_or_tone` when numeric, else `tone_or_default` when numeric,
///   else `props.tone` when truthy (numeric strings count), else `0`
/// - default: `default` when `tone_or_default` is the tone itself, otherwise
///   `tone_or_default`
///
/// A missing palette or palette entry yields the default. A single entry acts
/// as a one-tone list. Negative tones count from the end; out-of-range tones
/// clamp to the first or last tone. Fractional tones truncate toward zero.
/// Non-numeric tones coerce as template arithmetic does; unparsable text
/// reads as tone `0`. Both the palette entry and the chosen tone may be
/// functions of props and are resolved before use.
///
/// ```rust
/// use styled_props::{palette, props, Value};
///
/// let props = props! {
///     "theme": props! { "palette": props! { "primary": ["a", "b", "c"] } },
/// };
/// assert_eq!(palette("primary", -1, ()).call(&props).unwrap(), Value::from("c"));
/// assert_eq!(palette("primary", 10, ()).call(&props).unwrap(), Value::from("c"));
/// assert_eq!(palette("accent", 0, "red").call(&props).unwrap(), Value::from("red"));
/// ```
pub fn palette(
    key_or_tone: impl Into<Value>,
    tone_or_default: impl Into<Value>,
    default: impl Into<Value>,
) -> StyleFn {
    let key_or_tone = key_or_tone.into();
    let tone_or_default = tone_or_default.into();
    let default = default.into();

    StyleFn::new(move |props| {
        let tone_value = palette_tone(props, &key_or_tone, &tone_or_default);
        let tone = tone_value.to_number();
        let fallback = if tone_or_default.strict_eq(&tone_value) {
            &default
        } else {
            &tone_or_default
        };

        let entry = props
            .get("theme")
            .and_then(|theme| theme.get("palette"))
            .filter(|palette| palette.is_truthy())
            .zip(palette_key(props, &key_or_tone).and_then(Value::property_key))
            .and_then(|(palette, key)| palette.get(&key))
            .filter(|entry| entry.is_truthy());

        let Some(entry) = entry else {
            return Ok(fallback.clone());
        };

        let tones = resolve_value(entry.clone(), props)?;
        let tones = match &tones {
            Value::List(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };

        match tone_index(tones.len(), tone) {
            Some(index) => {
                tracing::trace!(tone, index, len = tones.len(), "palette tone selected");
                resolve_value(tones[index].clone(), props)
            }
            None => Ok(Value::Undefined),
        }
    })
}

fn palette_key<'a>(props: &'a Value, key_or_tone: &'a Value) -> Option<&'a Value> {
    match key_or_tone {
        Value::String(_) => Some(key_or_tone),
        _ => props.get("palette"),
    }
}

/// The tone as given: a numeric argument, else a truthy `props.tone` of any
/// kind, else `0`. Callers coerce it with [`Value::to_number`].
fn palette_tone(props: &Value, key_or_tone: &Value, tone_or_default: &Value) -> Value {
    [key_or_tone, tone_or_default]
        .into_iter()
        .find(|arg| matches!(arg, Value::Number(_)))
        .or_else(|| props.get("tone").filter(|tone| tone.is_truthy()))
        .cloned()
        .unwrap_or(Value::Number(0.0))
}

/// Map a tone onto `0..len`: negatives count from the end, then clamp.
fn tone_index(len: usize, tone: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len as i64 - 1;
    // NaN casts to 0
    let tone = tone.trunc() as i64;
    let index = if tone < 0 {
        (len as i64).saturating_add(tone)
    } else {
        tone
    };
    Some(index.clamp(0, last) as usize)
}
