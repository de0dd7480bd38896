//! Co-organizer commands.

use anyhow::{bail, Result};
use clap::Subcommand;
use rgtw::{GTWClient, NewCoOrganizer};

use crate::handlers::organizer as handlers;
use crate::output::{print_done, print_table, OutputFormat};

#[derive(Subcommand)]
pub enum CoOrganizerAction {
    /// List co-organizers of a webinar
    #[command(alias = "ls")]
    List {
        /// Webinar key
        webinar: String,
    },

    /// Add a co-organizer
    Add {
        /// Webinar key
        webinar: String,
        /// Organizer key of an account holder
        #[arg(long, conflicts_with_all = ["name", "email"])]
        organizer_key: Option<String>,
        /// Name of an external co-organizer
        #[arg(long, requires = "email")]
        name: Option<String>,
        /// Email of an external co-organizer
        #[arg(long, requires = "name")]
        email: Option<String>,
    },

    /// Remove a co-organizer
    #[command(alias = "rm")]
    Remove {
        /// Webinar key
        webinar: String,
        /// Co-organizer key
        co_organizer: String,
        /// The co-organizer has no account
        #[arg(short, long)]
        external: bool,
    },

    /// Resend the invitation email
    Reinvite {
        /// Webinar key
        webinar: String,
        /// Co-organizer key
        co_organizer: String,
        /// The co-organizer has no account
        #[arg(short, long)]
        external: bool,
    },
}

pub async fn handle(
    client: &GTWClient,
    action: CoOrganizerAction,
    format: OutputFormat,
) -> Result<()> {
    match action {
        CoOrganizerAction::List { webinar } => {
            print_table(handlers::co_organizers(client, &webinar).await?, format)
        }
        CoOrganizerAction::Add {
            webinar,
            organizer_key,
            name,
            email,
        } => {
            let co_organizer = match (organizer_key, name, email) {
                (Some(key), _, _) => NewCoOrganizer::internal(key),
                (None, Some(name), Some(email)) => NewCoOrganizer::external(name, email),
                _ => bail!("pass --organizer-key, or --name and --email"),
            };
            print_table(
                handlers::add_co_organizer(client, &webinar, co_organizer).await?,
                format,
            );
        }
        CoOrganizerAction::Remove {
            webinar,
            co_organizer,
            external,
        } => {
            handlers::remove_co_organizer(client, &webinar, &co_organizer, external).await?;
            print_done(&format!("Removed co-organizer {co_organizer}"));
        }
        CoOrganizerAction::Reinvite {
            webinar,
            co_organizer,
            external,
        } => {
            handlers::reinvite_co_organizer(client, &webinar, &co_organizer, external).await?;
            print_done(&format!("Invitation resent to co-organizer {co_organizer}"));
        }
    }

    Ok(())
}
