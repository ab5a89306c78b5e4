use std::path::PathBuf;

use async_trait::async_trait;
use recs_client::{ApiClient, ApiError, Item, PredictionQuery};
use serde_json::Value;

use super::input::{attributes, parse_attr, parse_param, read_json};
use super::ResponseOutput;
use crate::cli::args::Op;

#[derive(Debug, thiserror::Error)]
pub enum ItemOpError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("input error: {0:#}")]
    Input(#[from] anyhow::Error),
}

/// Create or update one catalog item
#[derive(Debug, clap::Args, Clone)]
pub struct AddItem {
    #[arg(long)]
    pub item_id: String,
    #[arg(long)]
    pub item_name: String,
    #[arg(long)]
    pub item_url: String,
    #[arg(long)]
    pub image_url: String,
    /// Defaults to `product`
    #[arg(long)]
    pub item_type: Option<String>,
    /// Extra attribute sent in data_dict, as key=value
    #[arg(long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, Value)>,
}

/// Create or update every item in a JSON array
#[derive(Debug, clap::Args, Clone)]
pub struct BatchItems {
    /// JSON file, or `-` for stdin
    pub file: PathBuf,
}

/// Fetch recommendations for a user
#[derive(Debug, clap::Args, Clone)]
pub struct Predictions {
    #[arg(long)]
    pub email: String,
    /// Extra query parameter, as key=value
    #[arg(long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

#[async_trait]
impl Op for AddItem {
    type Error = ItemOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let item = Item {
            item_type: self.item_type.clone(),
            attributes: attributes(&self.attrs),
            ..Item::new(
                self.item_id.clone(),
                self.item_name.clone(),
                self.item_url.clone(),
                self.image_url.clone(),
            )
        };
        let response = client.add_item(item).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}

#[async_trait]
impl Op for BatchItems {
    type Error = ItemOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let items: Vec<Item> = read_json(&self.file)?;
        tracing::info!(count = items.len(), "sending item batch");
        let response = client.batch_add_items(items).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}

#[async_trait]
impl Op for Predictions {
    type Error = ItemOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let query = PredictionQuery {
            email: self.email.clone(),
            params: self.params.iter().cloned().collect(),
        };
        let response = client.get_predictions(query).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}
