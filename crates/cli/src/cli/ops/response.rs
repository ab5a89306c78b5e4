use std::fmt;

use recs_client::ApiError;
use reqwest::{Response, StatusCode};

/// Whatever the service answered, printed as-is.
#[derive(Debug)]
pub struct ResponseOutput {
    status: StatusCode,
    body: String,
}

impl ResponseOutput {
    pub async fn read(response: Response) -> Result<Self, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        Ok(Self { status, body })
    }
}

impl fmt::Display for ResponseOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if !self.body.is_empty() {
            write!(f, "\n{}", self.body)?;
        }
        Ok(())
    }
}
