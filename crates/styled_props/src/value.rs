//! Dynamic values flowing through style functions
//!
//! Props and themes are arbitrary nested data, so everything the resolvers
//! read or return is a [`Value`]. Truthiness and strict equality follow the
//! rules template interpolation expects: see [`Value::is_truthy`] and
//! [`Value::strict_eq`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;

/// Ordered string-keyed mapping used for props, themes and palettes.
pub type Map = IndexMap<String, Value, FxBuildHasher>;

/// A unary function of props, as returned by every factory in this crate.
///
/// Cloning is cheap; clones share the same underlying closure, which is
/// what [`Value::strict_eq`] compares.
#[derive(Clone)]
pub struct StyleFn(Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>);

impl StyleFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluate against a props object.
    pub fn call(&self, props: &Value) -> Result<Value> {
        (self.0)(props)
    }

    /// Whether both handles point at the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for StyleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StyleFn(..)")
    }
}

/// Any value a props object, theme or style function can hold.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    List(Arc<Vec<Value>>),
    Map(Arc<Map>),
    Func(StyleFn),
}

impl Value {
    /// Build a list value.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::List(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Build a map value, keeping insertion order.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Wrap a closure as a function value.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Func(StyleFn::new(f))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Func(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(&**map),
            _ => None,
        }
    }

    pub fn as_func(&self) -> Option<&StyleFn> {
        match self {
            Self::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Look up a single key: a map entry, or a list element by index.
    ///
    /// Scalars and functions have no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(key),
            Self::List(items) => list_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Numeric coercion as template arithmetic applies it.
    ///
    /// Numeric strings parse (blank ones are `0`), booleans are `0`/`1`,
    /// `null` is `0`. Anything else is `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Null => 0.0,
            Self::String(s) => {
                let text = s.trim();
                if text.is_empty() {
                    0.0
                } else {
                    text.parse().unwrap_or(f64::NAN)
                }
            }
            Self::Undefined | Self::List(_) | Self::Map(_) | Self::Func(_) => f64::NAN,
        }
    }

    /// Truthiness as seen by template interpolation.
    ///
    /// `false`, `0`, `NaN`, `""`, `null` and `undefined` are falsy. Everything
    /// else is truthy, including empty lists, empty maps and functions.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) | Self::Func(_) => true,
        }
    }

    /// Strict equality: scalars by value, containers and functions by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::Map(a), Self::Map(b)) => Arc::ptr_eq(a, b),
            (Self::Func(a), Self::Func(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// The text this value takes when used as a property key.
    ///
    /// Lists, maps and functions never name a key.
    pub fn property_key(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Undefined => Some(Cow::Borrowed("undefined")),
            Self::Null => Some(Cow::Borrowed("null")),
            Self::Bool(true) => Some(Cow::Borrowed("true")),
            Self::Bool(false) => Some(Cow::Borrowed("false")),
            Self::Number(n) => Some(Cow::Owned(format_number(*n))),
            Self::String(s) => Some(Cow::Borrowed(&**s)),
            Self::List(_) | Self::Map(_) | Self::Func(_) => None,
        }
    }

    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Func(_) => "function",
        }
    }
}

/// Free-function form of [`Value::is_truthy`].
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Canonical list index: ASCII digits without a leading zero, so `"01"`
/// and `"+1"` name no element.
fn list_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form past these magnitudes, with an explicit `+`
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        n.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Func(a), Self::Func(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// Interpolation text: the string a template would splice in.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined | Self::Null | Self::Map(_) | Self::Func(_) => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Arc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Arc::from(v))
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(Arc::from(v.as_str()))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Number(v as f64)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(Arc::new(v))
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::list(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(Arc::new(v))
    }
}

impl From<StyleFn> for Value {
    fn from(v: StyleFn) -> Self {
        Self::Func(v)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null | Self::Func(_) => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any theme or props value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Value, D::Error> {
        Value::deserialize(d)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(Arc::new(items)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
        let mut map = Map::with_capacity_and_hasher(access.size_hint().unwrap_or(0), FxBuildHasher);
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            map.insert(k, v);
        }
        Ok(Value::Map(Arc::new(map)))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn falsy_values() {
        for v in [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(-0.0),
            Value::Number(f64::NAN),
            Value::from(""),
        ] {
            assert!(!v.is_truthy(), "{v:?} should be falsy");
        }
    }

    #[test]
    fn empty_containers_and_functions_are_truthy() {
        assert!(Value::list(Vec::<Value>::new()).is_truthy());
        assert!(Value::Map(Arc::default()).is_truthy());
        assert!(Value::func(|_| Ok(Value::Undefined)).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::from(-1).is_truthy());
    }

    #[test]
    fn strict_eq_compares_containers_by_identity() {
        let a = Value::list(["x"]);
        let b = Value::list(["x"]);
        assert!(a.strict_eq(&a.clone()));
        assert!(!a.strict_eq(&b));
        // structural equality still holds
        assert_eq!(a, b);

        assert!(!Value::Number(f64::NAN).strict_eq(&Value::Number(f64::NAN)));
        assert!(Value::from("ok").strict_eq(&Value::from("ok")));
        assert!(!Value::from(1).strict_eq(&Value::from("1")));
    }

    #[test]
    fn get_indexes_lists_by_number() {
        let v = Value::list(["a", "b"]);
        assert_eq!(v.get("1"), Some(&Value::from("b")));
        assert_eq!(v.get("2"), None);
        assert_eq!(v.get("x"), None);
        assert_eq!(Value::from("abc").get("0"), None);
    }

    #[test]
    fn property_keys() {
        assert_eq!(Value::from(1).property_key().as_deref(), Some("1"));
        assert_eq!(Value::from(1.5).property_key().as_deref(), Some("1.5"));
        assert_eq!(Value::Bool(true).property_key().as_deref(), Some("true"));
        assert_eq!(Value::Undefined.property_key().as_deref(), Some("undefined"));
        assert_eq!(Value::list(["a"]).property_key(), None);
    }

    #[test]
    fn list_keys_must_be_canonical_indices() {
        let v = Value::list(["a", "b"]);
        assert_eq!(v.get("0"), Some(&Value::from("a")));
        assert_eq!(v.get("01"), None);
        assert_eq!(v.get("+1"), None);
        assert_eq!(v.get(" 1"), None);
        assert_eq!(v.get(""), None);
        assert_eq!(v.get("00"), None);
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Value::from(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(-2.5e30).to_string(), "-2.5e+30");
        assert_eq!(Value::from(1e-7).to_string(), "1e-7");
        assert_eq!(Value::from(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Value::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Value::from(0.000001).to_string(), "0.000001");
        assert_eq!(Value::from(1e21).property_key().as_deref(), Some("1e+21"));
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::from("2").to_number(), 2.0);
        assert_eq!(Value::from(" 1.5 ").to_number(), 1.5);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert_eq!(Value::Bool(true).to_number(), 1.0);
        assert_eq!(Value::Null.to_number(), 0.0);
        assert!(Value::from("red").to_number().is_nan());
        assert!(Value::Undefined.to_number().is_nan());
    }

    #[test]
    fn display_matches_interpolation_text() {
        assert_eq!(Value::from(12).to_string(), "12");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::Number(-0.0).to_string(), "0");
        assert_eq!(Value::Undefined.to_string(), "");
        assert_eq!(Value::list(["a", "b"]).to_string(), "a,b");
        assert_eq!(Value::from("#fff").to_string(), "#fff");
    }

    #[test]
    fn deserializes_json_in_order() {
        let v: Value = serde_json::from_str(r#"{"b": [1, "x", null], "a": true}"#).unwrap();
        let map = v.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(
            map["b"],
            Value::list([Value::from(1), Value::from("x"), Value::Null])
        );
        assert_eq!(map["a"], Value::Bool(true));
    }

    #[test]
    fn serializes_functions_as_null() {
        let v = Value::map([
            ("color", Value::from("red")),
            ("dyn", Value::func(|_| Ok(Value::Null))),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"color":"red","dyn":null}"#);
    }
}
