//! Data models for GoToWebinar entities.

mod audio;
pub(crate) mod flexible;
mod ids;
mod organizer;
mod registrant;
mod webinar;

pub use audio::{AudioType, AudioUpdate};
pub use ids::{CoOrganizerKey, PanelistKey, RegistrantKey, SessionKey, WebinarKey};
pub use organizer::{NewCoOrganizer, NewPanelist};
pub use registrant::{CreatedRegistrant, NewRegistrant, Registrant};
pub use webinar::{CreatedWebinar, TimeRange, Webinar, WebinarDefinition, WebinarType};
