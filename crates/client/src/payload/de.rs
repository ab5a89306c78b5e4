//! Lenient field parsing for payloads coming from files and job queues,
//! where ids are often integers and prices often strings.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// A string, or a number rendered as one. Null reads as empty so that
/// validation reports the field as missing.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct StringOrNumber;

    impl<'de> Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}

/// A number, or a string holding one. Null and blank strings read as unset.
pub(crate) fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    struct Price;

    impl<'de> Visitor<'de> for Price {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value as f64))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            value
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(Price)
        }
    }

    deserializer.deserialize_any(Price)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "price")]
        price: Option<f64>,
    }

    fn row(value: serde_json::Value) -> Result<Row, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn ids_accept_strings_and_numbers() {
        assert_eq!(row(json!({"id": "sku-1"})).unwrap().id, "sku-1");
        assert_eq!(row(json!({"id": 123})).unwrap().id, "123");
        assert_eq!(row(json!({"id": -7})).unwrap().id, "-7");
        assert_eq!(row(json!({"id": null})).unwrap().id, "");
        assert_eq!(row(json!({})).unwrap().id, "");
        assert!(row(json!({"id": ["a"]})).is_err());
    }

    #[test]
    fn prices_accept_numbers_and_numeric_strings() {
        assert_eq!(row(json!({"price": 9.99})).unwrap().price, Some(9.99));
        assert_eq!(row(json!({"price": "9.99"})).unwrap().price, Some(9.99));
        assert_eq!(row(json!({"price": 10})).unwrap().price, Some(10.0));
        assert_eq!(row(json!({"price": ""})).unwrap().price, None);
        assert_eq!(row(json!({"price": null})).unwrap().price, None);
        assert!(row(json!({"price": "cheap"})).is_err());
    }
}
