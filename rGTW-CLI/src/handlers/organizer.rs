//! Panelist and co-organizer handlers.

use anyhow::Result;
use colored::Colorize;
use rgtw::{GTWClient, NewCoOrganizer, NewPanelist};
use serde::Serialize;
use serde_json::Value;

use super::{into_body, items, text};
use crate::output::{PlainPrint, TableRow};

/// A panelist or co-organizer.
#[derive(Debug, Clone, Serialize)]
pub struct MemberInfo {
    pub key: String,
    pub name: String,
    pub email: String,
    pub external: bool,
}

impl MemberInfo {
    fn panelist(value: &Value) -> Self {
        Self {
            key: first_of(value, &["panelistId", "panelistKey"]),
            name: text(value, "name"),
            email: text(value, "email"),
            external: true,
        }
    }

    fn co_organizer(value: &Value) -> Self {
        let name = format!("{} {}", text(value, "givenName"), text(value, "surname"));
        Self {
            key: first_of(value, &["memberKey", "coorganizerKey"]),
            name: name.trim().to_string(),
            email: text(value, "email"),
            external: value
                .get("external")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

fn first_of(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| text(value, key))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

impl TableRow for MemberInfo {
    fn headers() -> Vec<&'static str> {
        vec!["Key", "Name", "Email", "External"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.name.clone(),
            self.email.clone(),
            if self.external { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl PlainPrint for MemberInfo {
    fn plain_print(&self) {
        println!(
            "[{}] {} <{}>{}",
            self.key.cyan(),
            self.name.bold(),
            self.email,
            if self.external {
                " (external)".dimmed().to_string()
            } else {
                String::new()
            }
        );
    }
}

/// Panelists of a webinar.
pub async fn panelists(client: &GTWClient, webinar: &str) -> Result<Vec<MemberInfo>> {
    let body = into_body(client.panelists().list(webinar).await?)?;
    Ok(items(body).iter().map(MemberInfo::panelist).collect())
}

/// Add panelists given as `name:email` pairs.
pub async fn add_panelists(
    client: &GTWClient,
    webinar: &str,
    panelists: Vec<NewPanelist>,
) -> Result<Vec<MemberInfo>> {
    let body = into_body(client.panelists().create(webinar, panelists).await?)?;
    Ok(items(body).iter().map(MemberInfo::panelist).collect())
}

/// Remove a panelist.
pub async fn remove_panelist(client: &GTWClient, webinar: &str, panelist: &str) -> Result<()> {
    into_body(client.panelists().delete(webinar, panelist).await?)?;
    Ok(())
}

/// Resend a panelist's invitation.
pub async fn reinvite_panelist(client: &GTWClient, webinar: &str, panelist: &str) -> Result<()> {
    into_body(client.panelists().resend_invitation(webinar, panelist).await?)?;
    Ok(())
}

/// Co-organizers of a webinar.
pub async fn co_organizers(client: &GTWClient, webinar: &str) -> Result<Vec<MemberInfo>> {
    let body = into_body(client.co_organizers().list(webinar).await?)?;
    Ok(items(body).iter().map(MemberInfo::co_organizer).collect())
}

/// Add a co-organizer.
pub async fn add_co_organizer(
    client: &GTWClient,
    webinar: &str,
    co_organizer: NewCoOrganizer,
) -> Result<Vec<MemberInfo>> {
    let body = into_body(client.co_organizers().create(webinar, co_organizer).await?)?;
    Ok(items(body).iter().map(MemberInfo::co_organizer).collect())
}

/// Remove a co-organizer.
pub async fn remove_co_organizer(
    client: &GTWClient,
    webinar: &str,
    co_organizer: &str,
    external: bool,
) -> Result<()> {
    into_body(
        client
            .co_organizers()
            .delete(webinar, co_organizer, external)
            .await?,
    )?;
    Ok(())
}

/// Resend a co-organizer's invitation.
pub async fn reinvite_co_organizer(
    client: &GTWClient,
    webinar: &str,
    co_organizer: &str,
    external: bool,
) -> Result<()> {
    into_body(
        client
            .co_organizers()
            .resend_invitation(webinar, co_organizer, external)
            .await?,
    )?;
    Ok(())
}

/// Parse a `name:email` panelist argument.
pub fn parse_panelist(value: &str) -> Result<NewPanelist> {
    match value.rsplit_once(':') {
        Some((name, email)) if !name.is_empty() && email.contains('@') => {
            Ok(NewPanelist::new(name, email))
        }
        _ => anyhow::bail!("invalid panelist '{value}', expected NAME:EMAIL"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_panelist() {
        let panelist = parse_panelist("Grace Hopper:grace@example.com").unwrap();
        assert_eq!(panelist, NewPanelist::new("Grace Hopper", "grace@example.com"));

        assert!(parse_panelist("grace@example.com").is_err());
        assert!(parse_panelist(":grace@example.com").is_err());
    }

    #[test]
    fn test_member_from_payloads() {
        let panelist =
            MemberInfo::panelist(&json!({ "panelistId": 5, "name": "G", "email": "g@x" }));
        assert_eq!(panelist.key, "5");

        let co = MemberInfo::co_organizer(&json!({
            "memberKey": "9",
            "givenName": "Ada",
            "surname": "Lovelace",
            "email": "ada@example.com",
            "external": true
        }));
        assert_eq!(co.key, "9");
        assert_eq!(co.name, "Ada Lovelace");
        assert!(co.external);
    }
}
