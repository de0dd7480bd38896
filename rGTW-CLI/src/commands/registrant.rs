//! Registrant commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use rgtw::GTWClient;

use crate::handlers::registrant::{self as handlers, RegistrantForm};
use crate::output::{print_done, print_table, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum RegistrantAction {
    /// List registrants of a webinar
    #[command(alias = "ls")]
    List {
        /// Webinar key
        webinar: String,
    },

    /// Show one registrant
    Get {
        /// Webinar key
        webinar: String,
        /// Registrant key
        registrant: String,
    },

    /// Register someone for a webinar
    Add {
        /// Webinar key
        webinar: String,
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Email address
        email: String,
        /// Extra field as NAME=VALUE, repeatable. Needs `extended_registrant_fields`.
        #[arg(short, long = "field")]
        fields: Vec<String>,
        /// Resend the confirmation email if already registered
        #[arg(short, long)]
        resend: bool,
    },

    /// Remove a registrant
    #[command(alias = "rm")]
    Remove {
        /// Webinar key
        webinar: String,
        /// Registrant key
        registrant: String,
    },

    /// Show the registration form fields
    Fields {
        /// Webinar key
        webinar: String,
    },
}

pub async fn handle(
    client: &GTWClient,
    action: RegistrantAction,
    format: OutputFormat,
) -> Result<()> {
    match action {
        RegistrantAction::List { webinar } => {
            print_table(handlers::list(client, &webinar).await?, format)
        }
        RegistrantAction::Get {
            webinar,
            registrant,
        } => print_table(
            vec![handlers::get(client, &webinar, &registrant).await?],
            format,
        ),
        RegistrantAction::Add {
            webinar,
            first_name,
            last_name,
            email,
            fields,
            resend,
        } => {
            let form = RegistrantForm {
                first_name,
                last_name,
                email,
                fields: handlers::parse_fields(&fields)?,
                resend_confirmation: resend,
            };
            let created = handlers::create(client, &webinar, form).await?;
            print_done(&format!("Registered {}", created.registrant_key));
            println!("   {}", created.join_url.underline());
        }
        RegistrantAction::Remove {
            webinar,
            registrant,
        } => {
            handlers::delete(client, &webinar, &registrant).await?;
            print_done(&format!("Removed registrant {registrant}"));
        }
        RegistrantAction::Fields { webinar } => {
            print_value(&handlers::fields(client, &webinar).await?, format)
        }
    }

    Ok(())
}
