use crate::error::{NextTagError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::path::Path;

/// Year and month values that take precedence over the clock.
///
/// Each field is independent. A falsy JSON value (missing, `null`, `false`,
/// `0` or `""`) leaves the field absent so it falls back to the clock. Any
/// other value is kept as text: numbers in their shortest decimal form,
/// strings as written, so `{"year": "fy24", "month": -3}` yields `fy24` and
/// `-3`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct VersionOverride {
    #[serde(default, deserialize_with = "truthy_text")]
    pub year: Option<String>,

    #[serde(default, deserialize_with = "truthy_text")]
    pub month: Option<String>,
}

impl VersionOverride {
    /// Numeric override; a zero field is absent.
    pub fn new(year: i32, month: u32) -> Self {
        VersionOverride {
            year: Some(year).filter(|y| *y != 0).map(|y| y.to_string()),
            month: Some(month).filter(|m| *m != 0).map(|m| m.to_string()),
        }
    }

    /// Parses an override from JSON text such as `{"year": 2023, "month": 4}`.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and parses an override file.
    ///
    /// Read and parse failures are reported as [`NextTagError::VersionFile`]
    /// naming `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NextTagError::version_file(format!("{}: {}", path.display(), NextTagError::from(e)))
        })?;
        Self::from_json(&content).map_err(|e| {
            NextTagError::version_file(format!("{}: {}", path.display(), e))
        })
    }
}

fn truthy_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(render(&other)),
    }))
}

/// Text form of a JSON value when interpolated into a tag.
fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn render_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
