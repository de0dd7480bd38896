//! GoToWebinar CLI.

mod commands;
mod config;
mod handlers;
mod output;

use anyhow::{bail, Result};
use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{coorganizer, panelist, registrant, session, webinar};
use output::OutputFormat;
use rgtw::GTWClient;
use tracing_subscriber::EnvFilter;

/// GoToWebinar command-line client
#[derive(Parser)]
#[command(name = "rgtw")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    credentials: config::CredentialArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authentication
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Webinar operations
    #[command(alias = "w")]
    Webinar {
        #[command(subcommand)]
        action: webinar::WebinarAction,
    },

    /// Session operations
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        action: session::SessionAction,
    },

    /// Registrant operations
    #[command(alias = "r")]
    Registrant {
        #[command(subcommand)]
        action: registrant::RegistrantAction,
    },

    /// Panelist operations
    #[command(alias = "p")]
    Panelist {
        #[command(subcommand)]
        action: panelist::PanelistAction,
    },

    /// Co-organizer operations
    #[command(alias = "co")]
    Coorganizer {
        #[command(subcommand)]
        action: coorganizer::CoOrganizerAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Store credentials and authenticate with them
    Login,
    /// Forget credentials and cached tokens
    Logout,
    /// Show current auth status without contacting the API
    Status,
    /// Print a valid access token, authenticating if needed
    Token,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("rgtw=debug,rgtw_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Auth { action } => handle_auth(action, &cli.credentials).await,
        Commands::Config => show_config(),
        command => {
            let client = config::build_client(&cli.credentials)?;
            let result = dispatch(&client, command, cli.format).await;

            if let Some(outcome) = client.last_outcome() {
                tracing::debug!(
                    status = outcome.status_code,
                    reason = %outcome.reason_phrase,
                    "last call"
                );
            }
            config::store_auth(&client)?;

            result
        }
    }
}

async fn dispatch(client: &GTWClient, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Webinar { action } => webinar::handle(client, action, format).await,
        Commands::Session { action } => session::handle(client, action, format).await,
        Commands::Registrant { action } => registrant::handle(client, action, format).await,
        Commands::Panelist { action } => panelist::handle(client, action, format).await,
        Commands::Coorganizer { action } => coorganizer::handle(client, action, format).await,
        Commands::Auth { .. } | Commands::Config => Ok(()),
    }
}

async fn handle_auth(action: AuthAction, args: &config::CredentialArgs) -> Result<()> {
    match action {
        AuthAction::Login => {
            let mut cfg = config::load_config()?;
            let credentials = args.merge(cfg.credentials.as_ref());
            if credentials.username.is_empty()
                || credentials.password.is_empty()
                || credentials.consumer_key.is_empty()
            {
                bail!(
                    "pass --username, --password and --consumer-key, \
                     or set GTW_USERNAME, GTW_PASSWORD and GTW_CONSUMER_KEY"
                );
            }

            cfg.credentials = Some(credentials);
            cfg.auth = None;
            config::save_config(&cfg)?;

            let client = config::build_client(args)?;
            let organizer_key = client.organizer_key().await?;
            config::store_auth(&client)?;

            output::print_done(&format!("Logged in as organizer {organizer_key}"));
            Ok(())
        }
        AuthAction::Logout => {
            let mut cfg = config::load_config()?;
            cfg.credentials = None;
            cfg.auth = None;
            config::save_config(&cfg)?;
            output::print_done("Logged out");
            Ok(())
        }
        AuthAction::Status => {
            let cfg = config::load_config()?;
            match &cfg.auth {
                Some(auth) if auth.is_valid() => {
                    println!("Authenticated as organizer {}", auth.organizer_key.green());
                    println!("   Account: {}", auth.account_key);
                    println!("   Token expires: {}", format_expiry(auth.expires_in));
                }
                Some(auth) => {
                    println!("{}", "Token expired or incomplete".yellow());
                    println!("   Expired: {}", format_expiry(auth.expires_in));
                }
                None => println!("{}", "Not logged in".red()),
            }
            Ok(())
        }
        AuthAction::Token => {
            let client = config::build_client(args)?;
            let token = client.access_token().await;
            config::store_auth(&client)?;
            println!("{}", token?);
            Ok(())
        }
    }
}

fn show_config() -> Result<()> {
    let cfg = config::load_config()?;
    println!("Config file: {}", config::config_path()?.display());
    println!(
        "Base URL: {}",
        cfg.base_url.as_deref().unwrap_or(rgtw::client::DEFAULT_BASE_URL)
    );
    match &cfg.credentials {
        Some(credentials) => println!("Username: {}", credentials.username),
        None => println!("Username: -"),
    }
    println!("Extended registrant fields: {}", cfg.extended_registrant_fields);
    println!(
        "Authenticated: {}",
        cfg.auth.as_ref().is_some_and(|auth| auth.is_valid())
    );
    Ok(())
}

fn format_expiry(expires_at: i64) -> String {
    match Local.timestamp_opt(expires_at, 0).single() {
        Some(dt) if expires_at > 0 => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => "-".to_string(),
    }
}
