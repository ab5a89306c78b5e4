use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de, require, residual, Attributes, Payload};
use crate::error::ValidationError;

pub const DEFAULT_ITEM_TYPE: &str = "product";

/// A catalog item to create or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub item_url: String,
    #[serde(default)]
    pub image_url: String,
    /// Sent as `"product"` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Sizes, colors and the like, in the order given
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Attributes>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Item {
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        item_url: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            item_url: item_url.into(),
            image_url: image_url.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn item_type(&self) -> &str {
        match self.item_type.as_deref() {
            Some(item_type) if !item_type.trim().is_empty() => item_type,
            _ => DEFAULT_ITEM_TYPE,
        }
    }
}

impl Payload for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        require("item_id", &self.item_id)?;
        require("item_name", &self.item_name)?;
        require("item_url", &self.item_url)?;
        require("image_url", &self.image_url)
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut wire = Map::new();
        wire.insert("item_id".into(), Value::String(self.item_id.clone()));
        wire.insert("item_name".into(), Value::String(self.item_name.clone()));
        wire.insert("item_url".into(), Value::String(self.item_url.clone()));
        wire.insert("image_url".into(), Value::String(self.image_url.clone()));
        wire.insert("item_type".into(), Value::String(self.item_type().to_string()));
        if !self.variants.is_empty() {
            let variants = self.variants.iter().cloned().map(Value::Object).collect();
            wire.insert("variants".into(), Value::Array(variants));
        }
        let data_dict = residual(&self.attributes);
        if !data_dict.is_empty() {
            wire.insert("data_dict".into(), Value::Object(data_dict));
        }
        wire
    }
}
