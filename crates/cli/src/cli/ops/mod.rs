mod actions;
mod dispatch;
mod input;
mod items;
mod response;
mod users;

pub use actions::{AddAction, BatchActions};
pub use dispatch::Dispatch;
pub use items::{AddItem, BatchItems, Predictions};
pub use response::ResponseOutput;
pub use users::{AddUser, BatchUsers, GetUser};
