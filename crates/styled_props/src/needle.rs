//! Needles: declarative tests against a props object
//!
//! A needle turns props into a yes/no verdict. It is one of:
//!
//! - [`Needle::Path`]: the value at a dot path, checked for truthiness
//! - [`Needle::Predicate`]: a function of props, checked for truthiness
//! - [`Needle::List`]: every inner needle must pass
//! - [`Needle::Fields`]: per-path expectations, either a literal compared
//!   with strict equality or a predicate applied to the field value
//!
//! ```rust
//! use styled_props::{props, FieldTest, Needle};
//!
//! let needle = Needle::fields([
//!     ("foo", FieldTest::from(true)),
//!     ("bar", FieldTest::test(|v| Ok((v.as_str() == Some("ok")).into()))),
//! ]);
//!
//! assert!(needle.evaluate(&props! { "foo": true, "bar": "ok" }).unwrap());
//! assert!(!needle.evaluate(&props! { "foo": true, "bar": "no" }).unwrap());
//! ```

use std::borrow::Cow;

use crate::error::Result;
use crate::path::resolve_path;
use crate::value::{StyleFn, Value};

/// Expectation for a single field of a [`Needle::Fields`] needle.
#[derive(Clone, Debug)]
pub enum FieldTest {
    /// Field must be strictly equal to this value.
    Equals(Value),
    /// Field is passed to the function; its result must be truthy.
    Test(StyleFn),
}

impl FieldTest {
    pub fn test<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Test(StyleFn::new(f))
    }

    fn check(&self, field: &Value) -> Result<bool> {
        match self {
            Self::Equals(expected) => Ok(field.strict_eq(expected)),
            Self::Test(f) => Ok(f.call(field)?.is_truthy()),
        }
    }
}

impl From<Value> for FieldTest {
    fn from(v: Value) -> Self {
        match v {
            Value::Func(f) => Self::Test(f),
            other => Self::Equals(other),
        }
    }
}

impl From<StyleFn> for FieldTest {
    fn from(f: StyleFn) -> Self {
        Self::Test(f)
    }
}

impl From<&str> for FieldTest {
    fn from(v: &str) -> Self {
        Self::Equals(v.into())
    }
}

impl From<String> for FieldTest {
    fn from(v: String) -> Self {
        Self::Equals(v.into())
    }
}

impl From<bool> for FieldTest {
    fn from(v: bool) -> Self {
        Self::Equals(v.into())
    }
}

impl From<i32> for FieldTest {
    fn from(v: i32) -> Self {
        Self::Equals(v.into())
    }
}

impl From<f64> for FieldTest {
    fn from(v: f64) -> Self {
        Self::Equals(v.into())
    }
}

/// A test evaluated against props.
#[derive(Clone, Debug)]
pub enum Needle {
    Path(String),
    Predicate(StyleFn),
    List(Vec<Needle>),
    Fields(Vec<(String, FieldTest)>),
}

impl Needle {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::Predicate(StyleFn::new(f))
    }

    /// A needle that passes only when every item passes.
    pub fn all<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Needle>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// A field-map needle. Entries are checked in the given order.
    pub fn fields<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<FieldTest>,
    {
        Self::Fields(
            entries
                .into_iter()
                .map(|(k, t)| (k.into(), t.into()))
                .collect(),
        )
    }

    /// Build a needle from dynamic data by its shape.
    ///
    /// Lists become [`Needle::List`], functions [`Needle::Predicate`] and maps
    /// [`Needle::Fields`]. Anything else is read as a path using its key text,
    /// so a number or boolean becomes a (most likely missing) path rather than
    /// an error.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::List(items) => Self::List(items.iter().map(Self::from_value).collect()),
            Value::Func(f) => Self::Predicate(f.clone()),
            Value::Map(map) => Self::Fields(
                map.iter()
                    .map(|(k, v)| (k.clone(), FieldTest::from(v.clone())))
                    .collect(),
            ),
            other => Self::Path(
                other
                    .property_key()
                    .map(Cow::into_owned)
                    .unwrap_or_default(),
            ),
        }
    }

    /// Evaluate the needle against `props`.
    ///
    /// Lists and field maps short-circuit on the first failing entry; empty
    /// ones pass.
    pub fn evaluate(&self, props: &Value) -> Result<bool> {
        match self {
            Self::Path(path) => Ok(resolve_path(props, path, Value::Undefined).is_truthy()),
            Self::Predicate(f) => Ok(f.call(props)?.is_truthy()),
            Self::List(items) => {
                for item in items {
                    if !item.evaluate(props)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Fields(fields) => {
                for (path, test) in fields {
                    let field = resolve_path(props, path, Value::Undefined);
                    if !test.check(&field)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

impl From<&str> for Needle {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for Needle {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<&String> for Needle {
    fn from(path: &String) -> Self {
        Self::Path(path.clone())
    }
}

impl From<StyleFn> for Needle {
    fn from(f: StyleFn) -> Self {
        Self::Predicate(f)
    }
}

impl From<Vec<Needle>> for Needle {
    fn from(items: Vec<Needle>) -> Self {
        Self::List(items)
    }
}

impl<N: Into<Needle>, const LEN: usize> From<[N; LEN]> for Needle {
    fn from(items: [N; LEN]) -> Self {
        Self::all(items)
    }
}

impl From<&Value> for Needle {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}
