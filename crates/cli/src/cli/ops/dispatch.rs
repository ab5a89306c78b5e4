use std::path::PathBuf;

use async_trait::async_trait;
use recs_client::{ApiClient, ApiError, Operation};

use super::input::read_json;
use super::ResponseOutput;
use crate::cli::args::Op;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("input error: {0:#}")]
    Input(#[from] anyhow::Error),
}

/// Run a serialized operation, e.g. one pulled off a job queue
#[derive(Debug, clap::Args, Clone)]
pub struct Dispatch {
    /// JSON file holding {"op": ..., "args": ...}, or `-` for stdin
    pub file: PathBuf,
}

#[async_trait]
impl Op for Dispatch {
    type Error = DispatchError;
    type Output = ResponseOutput;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
        let operation: Operation = read_json(&self.file)?;
        tracing::info!(op = operation.name(), "dispatching");
        let response = client.dispatch(operation).await?;
        Ok(ResponseOutput::read(response).await?)
    }
}
