//! Session commands.

use anyhow::Result;
use clap::Subcommand;
use rgtw::GTWClient;

use crate::handlers::session::{self as handlers, Report};
use crate::output::{print_table, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum SessionAction {
    /// List sessions of one webinar
    #[command(alias = "ls")]
    List {
        /// Webinar key
        webinar: String,
    },

    /// List sessions of every webinar in a time range
    Range {
        /// Range start, ISO 8601
        from: String,
        /// Range end, ISO 8601
        to: String,
    },

    /// Show one session
    Get {
        /// Webinar key
        webinar: String,
        /// Session key
        session: String,
    },

    /// List attendees of a session
    Attendees {
        /// Webinar key
        webinar: String,
        /// Session key
        session: String,
    },

    /// Show a session report
    Report {
        /// Webinar key
        webinar: String,
        /// Session key
        session: String,
        /// Report to fetch
        #[arg(value_enum, default_value = "performance")]
        kind: Report,
        /// Restrict to one attendee
        #[arg(short, long)]
        registrant: Option<String>,
    },
}

pub async fn handle(client: &GTWClient, action: SessionAction, format: OutputFormat) -> Result<()> {
    match action {
        SessionAction::List { webinar } => {
            print_table(handlers::list(client, &webinar).await?, format)
        }
        SessionAction::Range { from, to } => {
            print_table(handlers::organizer(client, &from, &to).await?, format)
        }
        SessionAction::Get { webinar, session } => print_table(
            vec![handlers::get(client, &webinar, &session).await?],
            format,
        ),
        SessionAction::Attendees { webinar, session } => print_table(
            handlers::attendees(client, &webinar, &session).await?,
            format,
        ),
        SessionAction::Report {
            webinar,
            session,
            kind,
            registrant,
        } => {
            let value =
                handlers::report(client, &webinar, &session, registrant.as_deref(), kind).await?;
            print_value(&value, format);
        }
    }

    Ok(())
}
