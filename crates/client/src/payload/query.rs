use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::ValidationError;

/// Lookup filters for `GET users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub params: BTreeMap<String, String>,
}

impl UserQuery {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn by_user_id(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(email) = &self.email {
            query.push(("email".to_string(), email.clone()));
        }
        if let Some(user_id) = &self.user_id {
            query.push(("user_id".to_string(), user_id.clone()));
        }
        query.extend(self.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        query
    }
}

/// Recommendation lookup for one user, `GET items/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionQuery {
    #[serde(default)]
    pub email: String,
    /// Anything else the service accepts, e.g. `limit`
    #[serde(flatten)]
    pub params: BTreeMap<String, String>,
}

impl PredictionQuery {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![("email".to_string(), self.email.clone())];
        query.extend(self.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        query
    }
}
