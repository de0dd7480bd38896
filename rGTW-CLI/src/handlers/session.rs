//! Session handlers.

use anyhow::Result;
use colored::Colorize;
use rgtw::GTWClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::webinar::{attendee_rows, AttendeeInfo};
use super::{decode_items, decode_one, into_body, key_text};
use crate::output::{format_time, PlainPrint, TableRow};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Session {
    session_key: Value,
    webinar_key: Value,
    start_time: String,
    end_time: String,
    registrants_attended: i64,
}

/// Session information.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_key: String,
    pub webinar_key: String,
    pub start_time: String,
    pub end_time: String,
    pub attended: i64,
}

impl From<Session> for SessionInfo {
    fn from(s: Session) -> Self {
        Self {
            session_key: key_text(&s.session_key),
            webinar_key: key_text(&s.webinar_key),
            start_time: s.start_time,
            end_time: s.end_time,
            attended: s.registrants_attended,
        }
    }
}

impl TableRow for SessionInfo {
    fn headers() -> Vec<&'static str> {
        vec!["Session", "Webinar", "Start", "End", "Attended"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.session_key.clone(),
            self.webinar_key.clone(),
            format_time(&self.start_time),
            format_time(&self.end_time),
            self.attended.to_string(),
        ]
    }
}

impl PlainPrint for SessionInfo {
    fn plain_print(&self) {
        println!(
            "{} {}",
            format!("[Session {}]", self.session_key).cyan(),
            format!("webinar {}", self.webinar_key).dimmed()
        );
        println!(
            "   {} → {} | {} attended",
            format_time(&self.start_time),
            format_time(&self.end_time),
            self.attended
        );
    }
}

fn session_rows(reply: rgtw::Reply) -> Result<Vec<SessionInfo>> {
    let sessions: Vec<Session> = decode_items(reply)?;
    Ok(sessions.into_iter().map(SessionInfo::from).collect())
}

/// Sessions of every webinar of the organizer in a time range.
pub async fn organizer(client: &GTWClient, from: &str, to: &str) -> Result<Vec<SessionInfo>> {
    session_rows(client.sessions().organizer(from, to).await?)
}

/// Sessions of one webinar.
pub async fn list(client: &GTWClient, webinar: &str) -> Result<Vec<SessionInfo>> {
    session_rows(client.sessions().list(webinar).await?)
}

/// One session.
pub async fn get(client: &GTWClient, webinar: &str, session: &str) -> Result<SessionInfo> {
    let session: Session = decode_one(client.sessions().get(webinar, session).await?)?;
    Ok(SessionInfo::from(session))
}

/// Attendees of one session.
pub async fn attendees(
    client: &GTWClient,
    webinar: &str,
    session: &str,
) -> Result<Vec<AttendeeInfo>> {
    attendee_rows(client.sessions().attendees(webinar, session).await?)
}

/// Which per-session report to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Report {
    Performance,
    Polls,
    Questions,
    Surveys,
}

/// A per-session report, or a per-attendee one when `registrant` is given.
pub async fn report(
    client: &GTWClient,
    webinar: &str,
    session: &str,
    registrant: Option<&str>,
    report: Report,
) -> Result<Value> {
    let sessions = client.sessions();
    let reply = match (registrant, report) {
        (None, Report::Performance) => sessions.performance(webinar, session).await?,
        (None, Report::Polls) => sessions.polls(webinar, session).await?,
        (None, Report::Questions) => sessions.questions(webinar, session).await?,
        (None, Report::Surveys) => sessions.surveys(webinar, session).await?,
        (Some(r), Report::Performance) => sessions.attendee(webinar, session, r).await?,
        (Some(r), Report::Polls) => sessions.attendee_polls(webinar, session, r).await?,
        (Some(r), Report::Questions) => sessions.attendee_questions(webinar, session, r).await?,
        (Some(r), Report::Surveys) => sessions.attendee_surveys(webinar, session, r).await?,
    };
    into_body(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_session_info_from_payload() {
        let session: Session = serde_json::from_value(json!({
            "sessionKey": 11,
            "webinarKey": "22",
            "startTime": "2024-01-01T10:00:00Z",
            "endTime": "2024-01-01T11:00:00Z",
            "registrantsAttended": 5
        }))
        .unwrap();

        let info = SessionInfo::from(session);
        assert_eq!(info.session_key, "11");
        assert_eq!(info.webinar_key, "22");
        assert_eq!(info.attended, 5);
    }
}
