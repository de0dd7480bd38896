//! Webinar handlers.

use anyhow::Result;
use colored::Colorize;
use rgtw::{CreatedWebinar, GTWClient, TimeRange, Webinar, WebinarType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{decode_items, decode_one, into_body, key_text};
use crate::output::{format_duration, format_time, PlainPrint, TableRow};

/// Webinar information.
#[derive(Debug, Clone, Serialize)]
pub struct WebinarInfo {
    pub key: String,
    pub subject: String,
    pub starts: String,
    pub sessions: usize,
    pub time_zone: String,
    pub registration_url: String,
}

impl From<&Webinar> for WebinarInfo {
    fn from(w: &Webinar) -> Self {
        Self {
            key: w.webinar_key.to_string(),
            subject: w.subject.clone(),
            starts: w.first_start().unwrap_or_default().to_string(),
            sessions: w.times.len(),
            time_zone: w.time_zone.clone(),
            registration_url: w.registration_url.clone().unwrap_or_default(),
        }
    }
}

impl TableRow for WebinarInfo {
    fn headers() -> Vec<&'static str> {
        vec!["Key", "Subject", "Starts", "Sessions", "Time Zone"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.subject.clone(),
            format_time(&self.starts),
            self.sessions.to_string(),
            self.time_zone.clone(),
        ]
    }
}

impl PlainPrint for WebinarInfo {
    fn plain_print(&self) {
        println!("[{}] {}", self.key.cyan(), self.subject.bold());
        println!(
            "   {} | {} | {} session(s)",
            format_time(&self.starts).dimmed(),
            self.time_zone.dimmed(),
            self.sessions
        );
        if !self.registration_url.is_empty() {
            println!("   {}", self.registration_url.underline());
        }
    }
}

/// Meeting time information.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingTimeInfo {
    pub start_time: String,
    pub end_time: String,
}

impl From<&TimeRange> for MeetingTimeInfo {
    fn from(t: &TimeRange) -> Self {
        Self {
            start_time: t.start_time.clone(),
            end_time: t.end_time.clone(),
        }
    }
}

impl TableRow for MeetingTimeInfo {
    fn headers() -> Vec<&'static str> {
        vec!["Start", "End"]
    }
    fn row(&self) -> Vec<String> {
        vec![format_time(&self.start_time), format_time(&self.end_time)]
    }
}

impl PlainPrint for MeetingTimeInfo {
    fn plain_print(&self) {
        println!(
            "{} {} {}",
            format_time(&self.start_time).green(),
            "→".dimmed(),
            format_time(&self.end_time).green()
        );
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Attendee {
    registrant_key: Value,
    first_name: String,
    last_name: String,
    email: String,
    attendance_time_in_seconds: i64,
}

/// Attendee information, shared by webinar and session listings.
#[derive(Debug, Clone, Serialize)]
pub struct AttendeeInfo {
    pub registrant_key: String,
    pub name: String,
    pub email: String,
    pub attendance_seconds: i64,
}

impl From<Attendee> for AttendeeInfo {
    fn from(a: Attendee) -> Self {
        Self {
            registrant_key: key_text(&a.registrant_key),
            name: format!("{} {}", a.first_name, a.last_name).trim().to_string(),
            email: a.email,
            attendance_seconds: a.attendance_time_in_seconds,
        }
    }
}

impl TableRow for AttendeeInfo {
    fn headers() -> Vec<&'static str> {
        vec!["Registrant", "Name", "Email", "Attended"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.registrant_key.clone(),
            self.name.clone(),
            self.email.clone(),
            format_duration(self.attendance_seconds),
        ]
    }
}

impl PlainPrint for AttendeeInfo {
    fn plain_print(&self) {
        println!(
            "{} <{}> {}",
            self.name.bold(),
            self.email,
            format!("[{}]", format_duration(self.attendance_seconds)).dimmed()
        );
    }
}

/// Decode an attendee list reply.
pub fn attendee_rows(reply: rgtw::Reply) -> Result<Vec<AttendeeInfo>> {
    let attendees: Vec<Attendee> = decode_items(reply)?;
    Ok(attendees.into_iter().map(AttendeeInfo::from).collect())
}

fn webinar_rows(reply: rgtw::Reply) -> Result<Vec<WebinarInfo>> {
    let webinars: Vec<Webinar> = decode_items(reply)?;
    Ok(webinars.iter().map(WebinarInfo::from).collect())
}

/// Upcoming webinars of the organizer.
pub async fn upcoming(client: &GTWClient) -> Result<Vec<WebinarInfo>> {
    webinar_rows(client.webinars().upcoming().await?)
}

/// Every webinar of the organizer.
pub async fn all(client: &GTWClient) -> Result<Vec<WebinarInfo>> {
    webinar_rows(client.webinars().all().await?)
}

/// Past webinars in a time range.
pub async fn historical(client: &GTWClient, from: &str, to: &str) -> Result<Vec<WebinarInfo>> {
    webinar_rows(client.webinars().historical(from, to).await?)
}

/// One page of account-wide webinars.
pub async fn account(
    client: &GTWClient,
    from: &str,
    to: &str,
    page: u32,
    size: u32,
) -> Result<Vec<WebinarInfo>> {
    let reply = client
        .webinars()
        .account(from, to)
        .page(page)
        .size(size)
        .send()
        .await?;
    webinar_rows(reply)
}

/// One webinar.
pub async fn get(client: &GTWClient, key: &str) -> Result<WebinarInfo> {
    let webinar: Webinar = decode_one(client.webinars().get(key).await?)?;
    Ok(WebinarInfo::from(&webinar))
}

/// Options of a create or update call.
#[derive(Debug, Clone)]
pub struct WebinarForm {
    pub subject: String,
    pub description: String,
    pub times: Vec<TimeRange>,
    pub time_zone: String,
    pub webinar_type: WebinarType,
    pub password_protected: bool,
}

/// Create a webinar and return its key.
pub async fn create(client: &GTWClient, form: WebinarForm) -> Result<String> {
    let reply = client
        .webinars()
        .create(&form.subject, &form.description, form.times, &form.time_zone)
        .webinar_type(form.webinar_type)
        .password_protected(form.password_protected)
        .send()
        .await?;
    let created: CreatedWebinar = decode_one(reply)?;
    Ok(created.webinar_key.to_string())
}

/// Replace a webinar's definition.
pub async fn update(client: &GTWClient, key: &str, form: WebinarForm, notify: bool) -> Result<()> {
    let reply = client
        .webinars()
        .update(key, &form.subject, &form.description, form.times, &form.time_zone)
        .webinar_type(form.webinar_type)
        .password_protected(form.password_protected)
        .notify_participants(notify)
        .send()
        .await?;
    into_body(reply)?;
    Ok(())
}

/// Cancel a webinar.
pub async fn cancel(client: &GTWClient, key: &str, send_emails: bool) -> Result<()> {
    let reply = client
        .webinars()
        .cancel(key)
        .send_cancellation_emails(send_emails)
        .send()
        .await?;
    into_body(reply)?;
    Ok(())
}

/// Attendees across all sessions.
pub async fn attendees(client: &GTWClient, key: &str) -> Result<Vec<AttendeeInfo>> {
    attendee_rows(client.webinars().attendees(key).await?)
}

/// Scheduled meeting times.
pub async fn meeting_times(client: &GTWClient, key: &str) -> Result<Vec<MeetingTimeInfo>> {
    let times: Vec<TimeRange> = decode_items(client.webinars().meeting_times(key).await?)?;
    Ok(times.iter().map(MeetingTimeInfo::from).collect())
}

/// Audio settings.
pub async fn audio(client: &GTWClient, key: &str) -> Result<Value> {
    into_body(client.webinars().audio(key).await?)
}

/// Performance across all sessions.
pub async fn performance(client: &GTWClient, key: &str) -> Result<Value> {
    into_body(client.webinars().performance(key).await?)
}

/// Parse `start/end` pairs into meeting times.
pub fn parse_times(values: &[String]) -> Result<Vec<TimeRange>> {
    values
        .iter()
        .map(|value| match value.split_once('/') {
            Some((start, end)) if !start.is_empty() && !end.is_empty() => {
                Ok(TimeRange::new(start, end))
            }
            _ => anyhow::bail!("invalid time range '{value}', expected START/END"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_times() {
        let times =
            parse_times(&["2024-01-01T10:00:00Z/2024-01-01T11:00:00Z".to_string()]).unwrap();
        assert_eq!(
            times,
            vec![TimeRange::new("2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z")]
        );

        assert!(parse_times(&["2024-01-01T10:00:00Z".to_string()]).is_err());
        assert!(parse_times(&["/x".to_string()]).is_err());
    }

    #[test]
    fn test_attendee_from_numeric_key() {
        let attendee: Attendee = serde_json::from_value(json!({
            "registrantKey": 123,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "attendanceTimeInSeconds": 90
        }))
        .unwrap();

        let info = AttendeeInfo::from(attendee);
        assert_eq!(info.registrant_key, "123");
        assert_eq!(info.name, "Ada Lovelace");
        assert_eq!(info.attendance_seconds, 90);
    }
}
