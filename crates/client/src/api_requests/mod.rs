mod actions;
mod items;
mod users;

pub use actions::{AddAction, BatchAddActions};
pub use items::{AddItem, BatchAddItems, GetPredictions};
pub use users::{AddUser, BatchAddUsers, GetUser};

use reqwest::{Client, RequestBuilder, Url};
use serde_json::{Map, Value};

use crate::config::AsyncMode;
use crate::encoding::encode_map;
use crate::error::ApiError;

/// Definition of an API request
pub trait ApiRequest: Send + Sync {
    /// Validates the payload and builds a Reqwest request. Nothing is built
    /// when validation fails.
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError>;
}

/// POST an encoded JSON body carrying the async flag.
pub(crate) fn post_json(
    client: &Client,
    url: Url,
    body: Map<String, Value>,
    async_mode: AsyncMode,
) -> RequestBuilder {
    let mut body = encode_map(body);
    body.insert("async".into(), Value::from(async_mode.flag()));
    client.post(url).json(&Value::Object(body))
}

/// POST `{ "batch": [...] }` built from already validated wire payloads.
pub(crate) fn post_batch(
    client: &Client,
    url: Url,
    entries: Vec<Map<String, Value>>,
    async_mode: AsyncMode,
) -> RequestBuilder {
    let batch = entries.into_iter().map(Value::Object).collect();
    let mut body = Map::new();
    body.insert("batch".into(), Value::Array(batch));
    post_json(client, url, body, async_mode)
}

/// GET with the async flag appended to the query string; never a body.
pub(crate) fn get_query(
    client: &Client,
    url: Url,
    query: &[(String, String)],
    async_mode: AsyncMode,
) -> RequestBuilder {
    client
        .get(url)
        .query(query)
        .query(&[("async", async_mode.flag())])
}
