//! Subcommands.

pub mod coorganizer;
pub mod panelist;
pub mod registrant;
pub mod session;
pub mod webinar;
