use std::path::PathBuf;

use async_trait::async_trait;
use recs_client::{ApiClient, ApiError, User, UserQuery};
use serde_json::Value;

use super::input::{attributes, parse_attr, parse_param, read_json};
use super::ResponseOutput;
use crate::cli::args::Op;

#[derive(Debug, thiserror::Error)]
pub enum UserOpError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("input error: {0:#}")]
    Input(#[from] anyhow::Error),
}

/// Create or update one user
#[derive(Debug, clap::Args, Clone)]
pub struct AddUser {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub user_id: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub social_handle: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    /// Extra attribute sent in data_dict, as key=value
    #[arg(long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, Value)>,
}

/// Create or update every user in a JSON array
#[derive(Debug, clap::Args, Clone)]
pub struct BatchUsers {
    /// JSON file, or `-` for stdin
    pub file: PathBuf,
}

/// Look a user up
#[derive(Debug, clap::Args, Clone)]
pub struct GetUser {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub user_id: Option<String>,
    /// Extra query parameter, as key=value
    #[arg(long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

#[async_trait]
impl Op for AddUser {
    type Error = UserOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let user = User {
            email: self.email.clone(),
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            social_handle: self.social_handle.clone(),
            image_url: self.image_url.clone(),
            attributes: attributes(&self.attrs),
        };
        let response = client.add_user(user).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}

#[async_trait]
impl Op for BatchUsers {
    type Error = UserOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let users: Vec<User> = read_json(&self.file)?;
        tracing::info!(count = users.len(), "sending user batch");
        let response = client.batch_add_users(users).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}

#[async_trait]
impl Op for GetUser {
    type Error = UserOpError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let query = UserQuery {
            email: self.email.clone(),
            user_id: self.user_id.clone(),
            params: self.params.iter().cloned().collect(),
        };
        let response = client.get_user(query).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}
