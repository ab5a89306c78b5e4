use std::error::Error;
use std::fmt;

use clap::Subcommand;
use recs_client::ApiClient;

use super::ops::AddAction as AddActionOp;
use super::ops::AddItem as AddItemOp;
use super::ops::AddUser as AddUserOp;
use super::ops::BatchActions as BatchActionsOp;
use super::ops::BatchItems as BatchItemsOp;
use super::ops::BatchUsers as BatchUsersOp;
use super::ops::Dispatch as DispatchOp;
use super::ops::GetUser as GetUserOp;
use super::ops::Predictions as PredictionsOp;
use crate::config::Overrides;

pub use clap::Parser;

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, client: &ApiClient) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(client).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }
    };
}

/// Talk to the recommendation API from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API username (falls back to RECS_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// API key (falls back to RECS_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Ask the service to process the request before answering (async=0)
    #[arg(long, global = true)]
    pub sync: bool,

    /// Versioned API base URL (falls back to RECS_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print full request and response traces
    #[arg(long, global = true)]
    pub debug: bool,
}

impl GlobalArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            username: self.username.clone(),
            api_key: self.api_key.clone(),
            synchronous: self.sync,
            base_url: self.base_url.clone(),
            debug: self.debug,
        }
    }
}

use crate::command_enum;

command_enum! {
    (AddUser, AddUserOp),
    (BatchUsers, BatchUsersOp),
    (GetUser, GetUserOp),
    (AddItem, AddItemOp),
    (BatchItems, BatchItemsOp),
    (Predictions, PredictionsOp),
    (AddAction, AddActionOp),
    (BatchActions, BatchActionsOp),
    (Dispatch, DispatchOp),
}

impl fmt::Display for OpOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpOutput::AddUser(output)
            | OpOutput::BatchUsers(output)
            | OpOutput::GetUser(output)
            | OpOutput::AddItem(output)
            | OpOutput::BatchItems(output)
            | OpOutput::Predictions(output)
            | OpOutput::AddAction(output)
            | OpOutput::BatchActions(output)
            | OpOutput::Dispatch(output) => write!(f, "{}", output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_the_subcommand() {
        let args = Args::try_parse_from([
            "recs",
            "predictions",
            "--email",
            "a@b.com",
            "--sync",
            "--username",
            "u",
        ])
        .unwrap();

        let overrides = args.global.overrides();
        assert!(overrides.synchronous);
        assert_eq!(overrides.username.as_deref(), Some("u"));
        assert!(matches!(args.command, Command::Predictions(_)));
    }

    #[test]
    fn add_action_takes_the_event_kind() {
        let args = Args::try_parse_from([
            "recs",
            "add-action",
            "email-click",
            "--item-id",
            "x",
            "--user-id",
            "y",
            "--attr",
            "campaign=spring",
        ])
        .unwrap();

        match args.command {
            Command::AddAction(op) => {
                assert_eq!(op.kind, recs_client::ActionType::EmailClick);
                assert_eq!(op.attrs.len(), 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
