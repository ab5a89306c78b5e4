mod cli;
mod config;
mod utils;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use cli::{Args, Op, Parser};
use config::Config;
use recs_client::ApiClient;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Get the configuration from the environment and flags
    let config = match Config::from_env(&args.global.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error loading configuration: {}", e);
            std::process::exit(2);
        }
    };

    // Set up logging
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let mut env_filter = EnvFilter::builder()
        .with_default_directive((*config.log_level()).into())
        .from_env_lossy();
    if config.debug() {
        if let Ok(directive) = "recs_client::trace=info".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stdout_layer).init();

    utils::register_panic_logger();
    utils::report_version();

    if !config.env_file_loaded() {
        tracing::debug!("No .env file found");
    }
    if let Some(level) = config.invalid_log_level() {
        tracing::warn!(level, "Invalid LOG_LEVEL, using default");
    }

    recs_client::debug::set_enabled(config.debug());

    let client = match config
        .client_config()
        .map_err(anyhow::Error::from)
        .and_then(|client_config| ApiClient::new(client_config).map_err(anyhow::Error::from))
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error creating client: {:#}", e);
            drop(guard);
            std::process::exit(2);
        }
    };

    tracing::debug!(
        base_url = %client.config().base_url(),
        async_mode = %client.config().async_mode(),
        "client ready"
    );

    // Run the op and capture any errors
    let code = match args.command.execute(&client).await {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("error: {}", e);
            1
        }
    };

    // flush buffered log lines before exiting
    drop(guard);
    std::process::exit(code);
}
