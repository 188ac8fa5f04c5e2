//! Theme documents
//!
//! Themes usually live in a config file rather than in code. [`ThemeConfig`]
//! reads one from TOML or JSON:
//!
//! ```toml
//! font = "Inter"
//!
//! [palette]
//! primary = ["#1976d2", "#2196f3", "#71bcf7", "#c2e2fb"]
//! accent = "#ff4081"
//! ```
//!
//! Everything outside `palette` is kept as a theme token in document order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::{Map, Value};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("theme document root is not a table, found {found}")]
    NotATable { found: &'static str },
}

/// A theme loaded from a config document.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Palette key to a single value or a list of tones.
    #[serde(default)]
    pub palette: Map,

    /// Remaining theme entries.
    #[serde(flatten)]
    pub tokens: Map,
}

impl ThemeConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.log_loaded("toml");
        Ok(config)
    }

    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let doc: serde_json::Value = serde_json::from_str(src)?;
        if !doc.is_object() {
            return Err(ConfigError::NotATable {
                found: json_kind(&doc),
            });
        }
        let config: Self = serde_json::from_value(doc)?;
        config.log_loaded("json");
        Ok(config)
    }

    fn log_loaded(&self, format: &str) {
        tracing::debug!(
            format,
            palettes = self.palette.len(),
            tokens = self.tokens.len(),
            "loaded theme"
        );
    }

    /// The theme as a value, with `palette` ahead of the other tokens.
    pub fn into_value(self) -> Value {
        let mut map = Map::with_capacity_and_hasher(self.tokens.len() + 1, Default::default());
        map.insert("palette".to_string(), Value::from(self.palette));
        map.extend(self.tokens);
        Value::Map(Arc::new(map))
    }
}

fn json_kind(doc: &serde_json::Value) -> &'static str {
    match doc {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Copy `props` with `theme` set under the `theme` key.
///
/// Non-map props are replaced by a map holding only the theme.
pub fn props_with_theme(props: &Value, theme: impl Into<Value>) -> Value {
    let mut map = props.as_map().cloned().unwrap_or_default();
    map.insert("theme".to_string(), theme.into());
    Value::Map(Arc::new(map))
}
