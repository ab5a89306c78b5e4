mod action;
mod de;
mod item;
mod query;
mod user;

pub use action::{Action, ActionType, ParseActionTypeError};
pub use item::{Item, DEFAULT_ITEM_TYPE};
pub use query::{PredictionQuery, UserQuery};
pub use user::User;

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Free-form attributes passed through to the remote service untouched.
pub type Attributes = Map<String, Value>;

/// A request body the remote API understands
pub trait Payload {
    /// Fails on the first required field that is missing or blank
    fn validate(&self) -> Result<(), ValidationError>;

    /// The JSON object the remote API expects, before value encoding
    fn to_wire(&self) -> Map<String, Value>;
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Validate every entry of a batch, reporting the index of the first bad one.
pub(crate) fn validate_batch<P: Payload>(entries: &[P]) -> Result<(), ValidationError> {
    for (index, entry) in entries.iter().enumerate() {
        if let Err(e) = entry.validate() {
            return Err(ValidationError::BatchEntry {
                index,
                field: e.field(),
            });
        }
    }
    Ok(())
}

/// The residual attribute map sent as `data_dict`. A caller-supplied
/// `data_dict` object is merged in rather than nested; keys given at the
/// top level win over the nested ones.
pub(crate) fn residual(attributes: &Attributes) -> Map<String, Value> {
    let mut attributes = attributes.clone();
    let mut data_dict = match attributes.remove("data_dict") {
        Some(Value::Object(nested)) => nested,
        Some(other) => {
            attributes.insert("data_dict".into(), other);
            Map::new()
        }
        None => Map::new(),
    };
    data_dict.extend(attributes);
    data_dict
}

pub(crate) fn insert_opt(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.clone()));
    }
}
