use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Response,
};

use crate::api_requests::{
    AddAction, AddItem, AddUser, ApiRequest, BatchAddActions, BatchAddItems, BatchAddUsers,
    GetPredictions, GetUser,
};
use crate::config::ClientConfig;
use crate::debug;
use crate::error::ApiError;
use crate::payload::{Action, ActionType, Item, PredictionQuery, User, UserQuery};

#[derive(Debug, Clone)]
/// ApiClient for interacting with the recommendation API
pub struct ApiClient {
    config: ClientConfig,
    client: Client,
}

impl ApiClient {
    /// Create a new ApiClient from an explicit configuration
    /// # Arguments
    /// * `config` - Credentials, async flag and base URL
    /// # Returns
    /// * `Self` - The client
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send anything that implements ApiRequest and hand back the raw
    /// response. Status codes are not interpreted.
    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<Response, ApiError> {
        let request_builder =
            request.build_request(self.config.base_url(), &self.client, self.config.async_mode())?;

        let request = request_builder
            .basic_auth(self.config.username(), Some(self.config.api_key()))
            .build()?;
        tracing::debug!(method = %request.method(), path = %request.url().path(), "calling recommendation api");
        debug::trace_request(&request);

        let response = self.client.execute(request).await?;
        debug::trace_response(&response);

        Ok(response)
    }

    pub async fn add_user(&self, user: User) -> Result<Response, ApiError> {
        self.call(AddUser { user }).await
    }

    pub async fn batch_add_users(&self, users: Vec<User>) -> Result<Response, ApiError> {
        self.call(BatchAddUsers { users }).await
    }

    pub async fn get_user(&self, query: UserQuery) -> Result<Response, ApiError> {
        self.call(GetUser { query }).await
    }

    pub async fn add_item(&self, item: Item) -> Result<Response, ApiError> {
        self.call(AddItem { item }).await
    }

    pub async fn batch_add_items(&self, items: Vec<Item>) -> Result<Response, ApiError> {
        self.call(BatchAddItems { items }).await
    }

    pub async fn get_predictions(&self, query: PredictionQuery) -> Result<Response, ApiError> {
        self.call(GetPredictions { query }).await
    }

    pub async fn add_action(
        &self,
        action_type: ActionType,
        action: Action,
    ) -> Result<Response, ApiError> {
        self.call(AddAction {
            action_type,
            action,
        })
        .await
    }

    pub async fn batch_add_actions(
        &self,
        action_type: ActionType,
        actions: Vec<Action>,
    ) -> Result<Response, ApiError> {
        self.call(BatchAddActions {
            action_type,
            actions,
        })
        .await
    }

    pub async fn add_purchase(&self, action: Action) -> Result<Response, ApiError> {
        self.add_action(ActionType::Purchase, action).await
    }

    pub async fn add_click(&self, action: Action) -> Result<Response, ApiError> {
        self.add_action(ActionType::Click, action).await
    }

    pub async fn add_email_open(&self, action: Action) -> Result<Response, ApiError> {
        self.add_action(ActionType::EmailOpen, action).await
    }

    pub async fn add_email_click(&self, action: Action) -> Result<Response, ApiError> {
        self.add_action(ActionType::EmailClick, action).await
    }

    pub async fn add_item_view(&self, action: Action) -> Result<Response, ApiError> {
        self.add_action(ActionType::ItemView, action).await
    }

    pub async fn batch_add_purchases(&self, actions: Vec<Action>) -> Result<Response, ApiError> {
        self.batch_add_actions(ActionType::Purchase, actions).await
    }

    pub async fn batch_add_clicks(&self, actions: Vec<Action>) -> Result<Response, ApiError> {
        self.batch_add_actions(ActionType::Click, actions).await
    }

    pub async fn batch_add_email_opens(&self, actions: Vec<Action>) -> Result<Response, ApiError> {
        self.batch_add_actions(ActionType::EmailOpen, actions).await
    }

    pub async fn batch_add_email_clicks(
        &self,
        actions: Vec<Action>,
    ) -> Result<Response, ApiError> {
        self.batch_add_actions(ActionType::EmailClick, actions).await
    }

    pub async fn batch_add_item_views(&self, actions: Vec<Action>) -> Result<Response, ApiError> {
        self.batch_add_actions(ActionType::ItemView, actions).await
    }
}
