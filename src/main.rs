//! Contact Gateway server
//!
//! Wires the collaborators explicitly and serves `POST /api/contact`:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Postgres │───▶│ Contact  │───▶│  Axum    │
//! │(YAML+env)│    │  Store   │    │ Service  │    │ Gateway  │
//! └──────────┘    └──────────┘    └────┬─────┘    └──────────┘
//!                                      │
//!                                 ┌────▼─────┐
//!                                 │  Mailer  │
//!                                 └──────────┘
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use contact_gateway::config::AppConfig;
use contact_gateway::contact::{ContactService, PgContactStore};
use contact_gateway::db::Database;
use contact_gateway::gateway::{self, state::AppState};
use contact_gateway::notify::{MailIdentity, SmtpMailer};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let database_url = config.database_url()?;
    let db = Database::connect(database_url)
        .await
        .context("Database connection error")?;
    db.init_schema()
        .await
        .context("Failed to initialize contacts schema")?;

    let store = Arc::new(PgContactStore::new(db.pool().clone()));
    let mailer = Arc::new(SmtpMailer::new(&config.mail).context("Failed to build SMTP transport")?);
    tracing::info!("SMTP relay: {} ({:?})", mailer.endpoint(), config.mail.tls);
    if config.mail.user.is_empty() {
        tracing::warn!("EMAIL_USER is not set; notifications will have an empty sender");
    }

    let service = ContactService::new(store, mailer, MailIdentity::from_config(&config.mail));
    let state = Arc::new(AppState::new(Arc::new(service)));

    gateway::run_server(&config.gateway, state).await
}

fn main() -> ExitCode {
    let env = get_env();
    let mut config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _log_guard = contact_gateway::logging::init_logging(&config);
    tracing::info!(
        "Starting Contact Gateway ({}) in {} mode",
        env!("GIT_HASH"),
        env
    );

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
