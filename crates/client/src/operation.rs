//! Every API operation as data.
//!
//! An [`Operation`] can be serialized, queued and replayed later through
//! [`ApiClient::dispatch`]. The JSON form is `{"op": "<name>", "args": ...}`.

use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::payload::{Action, ActionType, Item, PredictionQuery, User, UserQuery};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Operation {
    AddUser(User),
    BatchAddUsers(Vec<User>),
    GetUser(UserQuery),
    AddItem(Item),
    BatchAddItems(Vec<Item>),
    GetPredictions(PredictionQuery),
    AddPurchase(Action),
    AddClick(Action),
    AddEmailOpen(Action),
    AddEmailClick(Action),
    AddItemView(Action),
    BatchAddPurchases(Vec<Action>),
    BatchAddClicks(Vec<Action>),
    BatchAddEmailOpens(Vec<Action>),
    BatchAddEmailClicks(Vec<Action>),
    BatchAddItemViews(Vec<Action>),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddUser(_) => "add_user",
            Operation::BatchAddUsers(_) => "batch_add_users",
            Operation::GetUser(_) => "get_user",
            Operation::AddItem(_) => "add_item",
            Operation::BatchAddItems(_) => "batch_add_items",
            Operation::GetPredictions(_) => "get_predictions",
            Operation::AddPurchase(_) => "add_purchase",
            Operation::AddClick(_) => "add_click",
            Operation::AddEmailOpen(_) => "add_email_open",
            Operation::AddEmailClick(_) => "add_email_click",
            Operation::AddItemView(_) => "add_item_view",
            Operation::BatchAddPurchases(_) => "batch_add_purchases",
            Operation::BatchAddClicks(_) => "batch_add_clicks",
            Operation::BatchAddEmailOpens(_) => "batch_add_email_opens",
            Operation::BatchAddEmailClicks(_) => "batch_add_email_clicks",
            Operation::BatchAddItemViews(_) => "batch_add_item_views",
        }
    }

    /// The event type an action operation records, if it is one.
    pub fn action_type(&self) -> Option<ActionType> {
        match self {
            Operation::AddPurchase(_) | Operation::BatchAddPurchases(_) => Some(ActionType::Purchase),
            Operation::AddClick(_) | Operation::BatchAddClicks(_) => Some(ActionType::Click),
            Operation::AddEmailOpen(_) | Operation::BatchAddEmailOpens(_) => {
                Some(ActionType::EmailOpen)
            }
            Operation::AddEmailClick(_) | Operation::BatchAddEmailClicks(_) => {
                Some(ActionType::EmailClick)
            }
            Operation::AddItemView(_) | Operation::BatchAddItemViews(_) => {
                Some(ActionType::ItemView)
            }
            _ => None,
        }
    }
}

impl ApiClient {
    /// Run a single operation.
    pub async fn dispatch(&self, operation: Operation) -> Result<Response, ApiError> {
        tracing::debug!(
            op = operation.name(),
            action_type = ?operation.action_type(),
            "dispatching operation"
        );
        match operation {
            Operation::AddUser(user) => self.add_user(user).await,
            Operation::BatchAddUsers(users) => self.batch_add_users(users).await,
            Operation::GetUser(query) => self.get_user(query).await,
            Operation::AddItem(item) => self.add_item(item).await,
            Operation::BatchAddItems(items) => self.batch_add_items(items).await,
            Operation::GetPredictions(query) => self.get_predictions(query).await,
            Operation::AddPurchase(action) => self.add_purchase(action).await,
            Operation::AddClick(action) => self.add_click(action).await,
            Operation::AddEmailOpen(action) => self.add_email_open(action).await,
            Operation::AddEmailClick(action) => self.add_email_click(action).await,
            Operation::AddItemView(action) => self.add_item_view(action).await,
            Operation::BatchAddPurchases(actions) => self.batch_add_purchases(actions).await,
            Operation::BatchAddClicks(actions) => self.batch_add_clicks(actions).await,
            Operation::BatchAddEmailOpens(actions) => self.batch_add_email_opens(actions).await,
            Operation::BatchAddEmailClicks(actions) => self.batch_add_email_clicks(actions).await,
            Operation::BatchAddItemViews(actions) => self.batch_add_item_views(actions).await,
        }
    }
}
