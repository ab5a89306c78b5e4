use reqwest::{Client, RequestBuilder, Url};

use super::{post_batch, post_json, ApiRequest};
use crate::config::AsyncMode;
use crate::error::ApiError;
use crate::payload::{validate_batch, Action, ActionType, Payload};

#[derive(Debug, Clone)]
pub struct AddAction {
    pub action_type: ActionType,
    pub action: Action,
}

/// Several events of the same type in one call.
#[derive(Debug, Clone)]
pub struct BatchAddActions {
    pub action_type: ActionType,
    pub actions: Vec<Action>,
}

impl ApiRequest for AddAction {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        self.action.validate()?;
        let url = base_url.join("actions/")?;
        let body = self.action.to_wire_as(self.action_type);
        Ok(post_json(client, url, body, async_mode))
    }
}

impl ApiRequest for BatchAddActions {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        validate_batch(&self.actions)?;
        let url = base_url.join("actions/")?;
        let entries = self
            .actions
            .iter()
            .map(|action| action.to_wire_as(self.action_type))
            .collect();
        Ok(post_batch(client, url, entries, async_mode))
    }
}
