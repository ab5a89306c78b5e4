use std::path::PathBuf;

use async_trait::async_trait;
use recs_client::{Action, ActionType, ApiClient, ApiError};
use serde_json::Value;

use super::input::{attributes, parse_attr, read_json};
use super::ResponseOutput;
use crate::cli::args::Op;

#[derive(Debug, thiserror::Error)]
pub enum ActionOpError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("input error: {0:#}")]
    Input(#[from] anyhow::Error),
}

/// Record one event
#[derive(Debug, clap::Args, Clone)]
pub struct AddAction {
    /// purchase, click, email-open, email-click or item-view
    pub kind: ActionType,
    #[arg(long)]
    pub item_id: String,
    #[arg(long)]
    pub user_id: String,
    #[arg(long)]
    pub timestamp: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub zipcode: Option<String>,
    #[arg(long)]
    pub item_type: Option<String>,
    /// Extra field sent alongside the event, as key=value
    #[arg(long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, Value)>,
}

/// Record every event in a JSON array under one event kind
#[derive(Debug, clap::Args, Clone)]
pub struct BatchActions {
    pub kind: ActionType,
    /// JSON file, or `-` for stdin
    pub file: PathBuf,
}

#[async_trait]
impl Op for AddAction {
    type Error = ActionOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let action = Action {
            item_id: self.item_id.clone(),
            user_id: self.user_id.clone(),
            timestamp: self.timestamp.clone(),
            price: self.price,
            zipcode: self.zipcode.clone(),
            item_type: self.item_type.clone(),
            attributes: attributes(&self.attrs),
        };
        let response = client.add_action(self.kind, action).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}

#[async_trait]
impl Op for BatchActions {
    type Error = ActionOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let actions: Vec<Action> = read_json(&self.file)?;
        tracing::info!(count = actions.len(), kind = %self.kind, "sending event batch");
        let response = client.batch_add_actions(self.kind, actions).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}
