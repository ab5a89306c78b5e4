use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// `key=value`; the value is taken as JSON when it parses as a number,
/// boolean, array or object, and as a plain string otherwise.
pub fn parse_attr(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in `{}`", raw));
    }
    let value = match serde_json::from_str::<Value>(value) {
        Ok(parsed @ (Value::Number(_) | Value::Bool(_) | Value::Array(_) | Value::Object(_))) => {
            parsed
        }
        _ => Value::String(value.to_string()),
    };
    Ok((key.to_string(), value))
}

/// `key=value` as plain strings, for query parameters.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in `{}`", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn attributes(attrs: &[(String, Value)]) -> Map<String, Value> {
    attrs.iter().cloned().collect()
}

/// Read JSON from a file, or from stdin when the path is `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("reading stdin")?;
        raw
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn attr_values_keep_json_types() {
        assert_eq!(parse_attr("age=30").unwrap(), ("age".into(), json!(30)));
        assert_eq!(parse_attr("vip=true").unwrap(), ("vip".into(), json!(true)));
        assert_eq!(parse_attr("color=red").unwrap(), ("color".into(), json!("red")));
        assert_eq!(
            parse_attr("tags=[\"a\",\"b\"]").unwrap(),
            ("tags".into(), json!(["a", "b"]))
        );
        assert_eq!(parse_attr("note=a=b").unwrap(), ("note".into(), json!("a=b")));
        assert_eq!(parse_attr("quoted=\"x\"").unwrap(), ("quoted".into(), json!("\"x\"")));
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(parse_attr("novalue").is_err());
        assert!(parse_attr("=x").is_err());
        assert!(parse_param("limit").is_err());
        assert_eq!(parse_param("limit=5").unwrap(), ("limit".into(), "5".into()));
    }

    #[test]
    fn reads_batches_from_a_file() {
        let path = std::env::temp_dir().join(format!("recs-cli-input-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"item_id": "x", "user_id": "y"}]"#).unwrap();

        let actions: Vec<recs_client::Action> = read_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(actions, vec![recs_client::Action::new("x", "y")]);
    }
}
