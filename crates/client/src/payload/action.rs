use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::{de, insert_opt, require, Attributes, Payload};
use crate::error::ValidationError;

/// Kinds of user-item interaction and their wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Click,
    Purchase,
    EmailOpen,
    EmailClick,
    ItemView,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        ActionType::Click,
        ActionType::Purchase,
        ActionType::EmailOpen,
        ActionType::EmailClick,
        ActionType::ItemView,
    ];

    pub fn code(&self) -> u8 {
        match self {
            ActionType::Click => 1,
            ActionType::Purchase => 2,
            ActionType::EmailOpen => 3,
            ActionType::EmailClick => 4,
            ActionType::ItemView => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActionType::Click => "click",
            ActionType::Purchase => "purchase",
            ActionType::EmailOpen => "email_open",
            ActionType::EmailClick => "email_click",
            ActionType::ItemView => "item_view",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown action type: {0}")]
pub struct ParseActionTypeError(String);

impl FromStr for ActionType {
    type Err = ParseActionTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        ActionType::ALL
            .into_iter()
            .find(|action_type| action_type.name() == normalized)
            .ok_or_else(|| ParseActionTypeError(value.to_string()))
    }
}

/// One recorded interaction. The action type is not part of the payload:
/// it is fixed by the request that carries it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub item_id: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(
        default,
        deserialize_with = "de::price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Action {
    pub fn new(item_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Wire form with the action type stamped in.
    pub fn to_wire_as(&self, action_type: ActionType) -> Map<String, Value> {
        let mut wire = self.to_wire();
        wire.insert("action_type".into(), Value::from(action_type.code()));
        wire
    }
}

impl Payload for Action {
    fn validate(&self) -> Result<(), ValidationError> {
        require("item_id", &self.item_id)?;
        require("user_id", &self.user_id)
    }

    fn to_wire(&self) -> Map<String, Value> {
        // pass-through attributes sit beside the recognized fields
        let mut wire = self.attributes.clone();
        wire.insert("item_id".into(), Value::String(self.item_id.clone()));
        wire.insert("user_id".into(), Value::String(self.user_id.clone()));
        insert_opt(&mut wire, "timestamp", &self.timestamp);
        if let Some(price) = self.price.and_then(Number::from_f64) {
            wire.insert("price".into(), Value::Number(price));
        }
        insert_opt(&mut wire, "zipcode", &self.zipcode);
        insert_opt(&mut wire, "item_type", &self.item_type);
        wire
    }
}
