//! Client for the recommendation API.
//!
//! Register users and catalog items, record behavioral events and fetch
//! personalized recommendations. Every call validates its payload locally,
//! sends exactly one HTTPS request and returns the raw [`reqwest::Response`].
//!
//! ```no_run
//! use recs_client::{ApiClient, ClientConfig, User};
//!
//! # async fn run() -> Result<(), recs_client::ApiError> {
//! let client = ApiClient::new(ClientConfig::new("username", "api-key"))?;
//! let response = client
//!     .add_user(User::new("a@b.com", "1").with_attribute("favorite_color", "red"))
//!     .await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod api_requests;
mod client;
pub mod config;
pub mod debug;
pub mod encoding;
mod error;
mod operation;
pub mod payload;

pub use client::ApiClient;
pub use config::{AsyncMode, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ValidationError};
pub use operation::Operation;
pub use payload::{Action, ActionType, Item, PredictionQuery, User, UserQuery};

pub use api_requests as requests;
