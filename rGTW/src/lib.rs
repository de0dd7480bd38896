//! Rust client library for the GoToWebinar REST API.
//!
//! ```no_run
//! # async fn run() -> rgtw::Result<()> {
//! let client = rgtw::GTWClient::builder()
//!     .credentials("organizer@example.com", "secret", "consumer-key")
//!     .build()?;
//!
//! let reply = client.webinars().upcoming().await?;
//! if reply.is_failure() {
//!     eprintln!("{:?} {:?}", client.status_code(), client.reason_phrase());
//! }
//!
//! // Persist this and pass it to `.auth(...)` next time.
//! let _cached = client.auth();
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export main types
pub use client::{
    AuthState, CallOutcome, Credentials, GTWClient, GTWClientBuilder, HttpConfig,
    RegistrantFields, Reply, RequestOptions,
};
pub use error::{Error, Result};

// Re-export commonly used models
pub use models::{
    AudioType, AudioUpdate, CoOrganizerKey, CreatedRegistrant, CreatedWebinar, NewCoOrganizer,
    NewPanelist, NewRegistrant, PanelistKey, Registrant, RegistrantKey, SessionKey, TimeRange,
    Webinar, WebinarKey, WebinarType,
};

// Re-export API types
pub use api::{operations, Operation, Scope};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GTWClient::builder().credentials("u", "p", "k").build();
        assert!(client.is_ok());

        let client = client.unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_client_requires_credentials() {
        let client = GTWClient::builder().build();
        assert!(matches!(client, Err(Error::Configuration(_))));
    }
}
