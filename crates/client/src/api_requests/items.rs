use reqwest::{Client, RequestBuilder, Url};

use super::{get_query, post_batch, post_json, ApiRequest};
use crate::config::AsyncMode;
use crate::error::ApiError;
use crate::payload::{validate_batch, Item, Payload, PredictionQuery};

#[derive(Debug, Clone)]
pub struct AddItem {
    pub item: Item,
}

#[derive(Debug, Clone)]
pub struct BatchAddItems {
    pub items: Vec<Item>,
}

/// Personalized recommendations for one user.
#[derive(Debug, Clone)]
pub struct GetPredictions {
    pub query: PredictionQuery,
}

impl ApiRequest for AddItem {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        self.item.validate()?;
        let url = base_url.join("items/")?;
        Ok(post_json(client, url, self.item.to_wire(), async_mode))
    }
}

impl ApiRequest for BatchAddItems {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        validate_batch(&self.items)?;
        let url = base_url.join("items/")?;
        let entries = self.items.iter().map(Payload::to_wire).collect();
        Ok(post_batch(client, url, entries, async_mode))
    }
}

impl ApiRequest for GetPredictions {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        self.query.validate()?;
        let url = base_url.join("items/")?;
        Ok(get_query(client, url, &self.query.to_query(), async_mode))
    }
}
