use std::{process::ExitCode, sync::Arc, time::Duration};

use clap::Parser;
use crosspost::{ClientConfig, HttpApi, Mutation, Session, SessionStore};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands {
    pub mod keys;
    pub mod login;
    pub mod user;
}
mod output;

use cli::{Cli, ClientArgs, Commands, KeysCommand};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("crosspost=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    let session = match create_session(&cli.client) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Commands::LoginUrl => commands::login::run(&session, format),
        Commands::Whoami => commands::user::whoami(&session, format).await,
        Commands::Logout => commands::user::logout(&session, format).await,
        Commands::Keys(KeysCommand::List) => commands::keys::list(&session, format).await,
        Commands::Keys(KeysCommand::Add { npub }) => {
            commands::keys::add(&session, npub, format).await
        }
        Commands::Keys(KeysCommand::Delete { npub }) => {
            commands::keys::delete(&session, npub, format).await
        }
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {e}");
        session
            .store()
            .commit(Mutation::PushNotificationError(e.to_string()));
    }

    if output::flush_notifications(session.store(), format) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Build the remote API client and an empty session store
fn create_session(args: &ClientArgs) -> crosspost::Result<Session> {
    let mut config = ClientConfig::new(&args.url)?;
    if let Some(session_id) = &args.session {
        config = config.with_session_id(session_id.clone());
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let api = HttpApi::new(&config)?;
    tracing::debug!(base_url = %config.base_url, "Created client");

    Ok(Session::new(Arc::new(api), SessionStore::new()))
}
