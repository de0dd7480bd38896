//! Panelist commands.

use anyhow::Result;
use clap::Subcommand;
use rgtw::GTWClient;

use crate::handlers::organizer as handlers;
use crate::output::{print_done, print_table, OutputFormat};

#[derive(Subcommand)]
pub enum PanelistAction {
    /// List panelists of a webinar
    #[command(alias = "ls")]
    List {
        /// Webinar key
        webinar: String,
    },

    /// Add panelists
    Add {
        /// Webinar key
        webinar: String,
        /// Panelist as NAME:EMAIL, one or more
        #[arg(required = true)]
        panelists: Vec<String>,
    },

    /// Remove a panelist
    #[command(alias = "rm")]
    Remove {
        /// Webinar key
        webinar: String,
        /// Panelist key
        panelist: String,
    },

    /// Resend the invitation email
    Reinvite {
        /// Webinar key
        webinar: String,
        /// Panelist key
        panelist: String,
    },
}

pub async fn handle(
    client: &GTWClient,
    action: PanelistAction,
    format: OutputFormat,
) -> Result<()> {
    match action {
        PanelistAction::List { webinar } => {
            print_table(handlers::panelists(client, &webinar).await?, format)
        }
        PanelistAction::Add { webinar, panelists } => {
            let panelists = panelists
                .iter()
                .map(|p| handlers::parse_panelist(p))
                .collect::<Result<Vec<_>>>()?;
            print_table(
                handlers::add_panelists(client, &webinar, panelists).await?,
                format,
            );
        }
        PanelistAction::Remove { webinar, panelist } => {
            handlers::remove_panelist(client, &webinar, &panelist).await?;
            print_done(&format!("Removed panelist {panelist}"));
        }
        PanelistAction::Reinvite { webinar, panelist } => {
            handlers::reinvite_panelist(client, &webinar, &panelist).await?;
            print_done(&format!("Invitation resent to panelist {panelist}"));
        }
    }

    Ok(())
}
