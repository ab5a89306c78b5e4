use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{de, insert_opt, require, residual, Attributes, Payload};
use crate::error::ValidationError;

/// A user to create or update.
///
/// Everything other than `email` and `user_id` is sent under `data_dict`,
/// the recognized attributes included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl User {
    pub fn new(email: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Payload for User {
    fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        require("user_id", &self.user_id)
    }

    fn to_wire(&self) -> Map<String, Value> {
        let mut data_dict = residual(&self.attributes);
        insert_opt(&mut data_dict, "first_name", &self.first_name);
        insert_opt(&mut data_dict, "last_name", &self.last_name);
        insert_opt(&mut data_dict, "social_handle", &self.social_handle);
        insert_opt(&mut data_dict, "image_url", &self.image_url);

        let mut wire = Map::new();
        wire.insert("email".into(), Value::String(self.email.clone()));
        wire.insert("user_id".into(), Value::String(self.user_id.clone()));
        if !data_dict.is_empty() {
            wire.insert("data_dict".into(), Value::Object(data_dict));
        }
        wire
    }
}
