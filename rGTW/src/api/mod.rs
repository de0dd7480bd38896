//! API modules.

mod coorganizer;
pub mod operations;
mod panelist;
mod registrant;
mod session;
mod webinar;

pub use coorganizer::CoOrganizerApi;
pub use operations::{Operation, Scope};
pub use panelist::PanelistApi;
pub use registrant::{CreateRegistrantBuilder, RegistrantApi};
pub use session::SessionApi;
pub use webinar::{
    AccountWebinarsBuilder, CancelWebinarBuilder, CreateWebinarBuilder, UpdateAudioBuilder,
    UpdateWebinarBuilder, WebinarApi,
};
