//! Webinar commands.

use anyhow::Result;
use clap::Subcommand;
use rgtw::{AudioType, AudioUpdate, GTWClient, WebinarType};

use crate::handlers::{into_body, webinar as handlers};
use crate::output::{print_done, print_table, print_value, OutputFormat};

#[derive(Subcommand)]
pub enum WebinarAction {
    /// List upcoming webinars
    #[command(alias = "ls")]
    Upcoming,

    /// List all webinars of the organizer
    All,

    /// List past webinars in a time range
    Historical {
        /// Range start, ISO 8601
        from: String,
        /// Range end, ISO 8601
        to: String,
    },

    /// List webinars across the whole account
    Account {
        /// Range start, ISO 8601
        from: String,
        /// Range end, ISO 8601
        to: String,
        /// Page number, starting at 0
        #[arg(short, long, default_value = "0")]
        page: u32,
        /// Page size
        #[arg(short, long, default_value = "20")]
        size: u32,
    },

    /// Show one webinar
    Get {
        /// Webinar key
        key: String,
    },

    /// Create a webinar
    Create {
        /// Subject
        #[arg(short, long)]
        subject: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Meeting time as START/END, repeatable
        #[arg(short, long = "time", required = true)]
        times: Vec<String>,
        /// Time zone, e.g. Europe/Berlin
        #[arg(short = 'z', long, default_value = "UTC")]
        time_zone: String,
        /// single_session, sequence or series
        #[arg(long = "type", default_value = "single_session")]
        webinar_type: WebinarType,
        /// Require a password to join
        #[arg(long)]
        password_protected: bool,
    },

    /// Replace a webinar's definition
    Update {
        /// Webinar key
        key: String,
        /// Subject
        #[arg(short, long)]
        subject: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Meeting time as START/END, repeatable
        #[arg(short, long = "time", required = true)]
        times: Vec<String>,
        /// Time zone
        #[arg(short = 'z', long, default_value = "UTC")]
        time_zone: String,
        /// single_session, sequence or series
        #[arg(long = "type", default_value = "single_session")]
        webinar_type: WebinarType,
        /// Require a password to join
        #[arg(long)]
        password_protected: bool,
        /// Email participants about the change
        #[arg(short, long)]
        notify: bool,
    },

    /// Cancel a webinar
    Cancel {
        /// Webinar key
        key: String,
        /// Email registrants about the cancellation
        #[arg(short, long)]
        notify: bool,
    },

    /// List attendees across all sessions
    Attendees {
        /// Webinar key
        key: String,
    },

    /// Show scheduled meeting times
    Times {
        /// Webinar key
        key: String,
    },

    /// Show audio settings
    Audio {
        /// Webinar key
        key: String,
    },

    /// Change the audio type
    SetAudio {
        /// Webinar key
        key: String,
        /// PSTN, VOIP, Hybrid or Private
        audio_type: AudioType,
        /// Email participants about the change
        #[arg(short, long)]
        notify: bool,
    },

    /// Show attendance performance
    Performance {
        /// Webinar key
        key: String,
    },
}

pub async fn handle(client: &GTWClient, action: WebinarAction, format: OutputFormat) -> Result<()> {
    match action {
        WebinarAction::Upcoming => print_table(handlers::upcoming(client).await?, format),
        WebinarAction::All => print_table(handlers::all(client).await?, format),
        WebinarAction::Historical { from, to } => {
            print_table(handlers::historical(client, &from, &to).await?, format)
        }
        WebinarAction::Account {
            from,
            to,
            page,
            size,
        } => print_table(
            handlers::account(client, &from, &to, page, size).await?,
            format,
        ),
        WebinarAction::Get { key } => print_table(vec![handlers::get(client, &key).await?], format),
        WebinarAction::Create {
            subject,
            description,
            times,
            time_zone,
            webinar_type,
            password_protected,
        } => {
            let form = handlers::WebinarForm {
                subject,
                description,
                times: handlers::parse_times(&times)?,
                time_zone,
                webinar_type,
                password_protected,
            };
            let key = handlers::create(client, form).await?;
            print_done(&format!("Created webinar {key}"));
        }
        WebinarAction::Update {
            key,
            subject,
            description,
            times,
            time_zone,
            webinar_type,
            password_protected,
            notify,
        } => {
            let form = handlers::WebinarForm {
                subject,
                description,
                times: handlers::parse_times(&times)?,
                time_zone,
                webinar_type,
                password_protected,
            };
            handlers::update(client, &key, form, notify).await?;
            print_done(&format!("Updated webinar {key}"));
        }
        WebinarAction::Cancel { key, notify } => {
            handlers::cancel(client, &key, notify).await?;
            print_done(&format!("Cancelled webinar {key}"));
        }
        WebinarAction::Attendees { key } => {
            print_table(handlers::attendees(client, &key).await?, format)
        }
        WebinarAction::Times { key } => {
            print_table(handlers::meeting_times(client, &key).await?, format)
        }
        WebinarAction::Audio { key } => print_value(&handlers::audio(client, &key).await?, format),
        WebinarAction::SetAudio {
            key,
            audio_type,
            notify,
        } => {
            let reply = client
                .webinars()
                .update_audio(&key, AudioUpdate::new(audio_type))
                .notify_participants(notify)
                .send()
                .await?;
            into_body(reply)?;
            print_done(&format!("Updated audio of webinar {key}"));
        }
        WebinarAction::Performance { key } => {
            print_value(&handlers::performance(client, &key).await?, format)
        }
    }

    Ok(())
}
