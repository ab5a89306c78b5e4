use reqwest::{Client, RequestBuilder, Url};

use super::{get_query, post_batch, post_json, ApiRequest};
use crate::config::AsyncMode;
use crate::error::ApiError;
use crate::payload::{validate_batch, Payload, User, UserQuery};

#[derive(Debug, Clone)]
pub struct AddUser {
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct BatchAddUsers {
    pub users: Vec<User>,
}

#[derive(Debug, Clone)]
pub struct GetUser {
    pub query: UserQuery,
}

impl ApiRequest for AddUser {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        self.user.validate()?;
        let url = base_url.join("users/")?;
        Ok(post_json(client, url, self.user.to_wire(), async_mode))
    }
}

impl ApiRequest for BatchAddUsers {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        validate_batch(&self.users)?;
        let url = base_url.join("users/")?;
        let entries = self.users.iter().map(Payload::to_wire).collect();
        Ok(post_batch(client, url, entries, async_mode))
    }
}

impl ApiRequest for GetUser {
    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
        async_mode: AsyncMode,
    ) -> Result<RequestBuilder, ApiError> {
        let url = base_url.join("users")?;
        Ok(get_query(client, url, &self.query.to_query(), async_mode))
    }
}
