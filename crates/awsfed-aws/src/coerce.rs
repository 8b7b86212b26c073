//! Scalar-or-list coercion of raw option values.

use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

/// Coerces a scalar to a string. Numbers are rendered in decimal.
pub(crate) fn to_string(key: &str, value: &Value) -> ConfigResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(ConfigError::invalid(
            key,
            format!("expected a string, got {}", kind(other)),
        )),
    }
}

/// Coerces a number or numeric string to an integer.
pub(crate) fn to_int(key: &str, value: &Value) -> ConfigResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ConfigError::invalid(key, format!("{n} is not an integer"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("'{s}' is not an integer"))),
        other => Err(ConfigError::invalid(
            key,
            format!("expected an integer, got {}", kind(other)),
        )),
    }
}

/// Coerces a boolean, number or boolean-like string.
pub(crate) fn to_bool(key: &str, value: &Value) -> ConfigResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f.abs() > 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" | "" => Ok(false),
            _ => Err(ConfigError::invalid(key, format!("'{s}' is not a boolean"))),
        },
        other => Err(ConfigError::invalid(
            key,
            format!("expected a boolean, got {}", kind(other)),
        )),
    }
}

/// Coerces a list of scalars, or a single scalar, to a list of strings.
pub(crate) fn to_list(key: &str, value: &Value) -> ConfigResult<Vec<String>> {
    match value {
        Value::Array(items) => items.iter().map(|item| to_string(key, item)).collect(),
        scalar => Ok(vec![to_string(key, scalar)?]),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
