//! Registrant handlers.

use anyhow::Result;
use colored::Colorize;
use rgtw::{CreatedRegistrant, GTWClient, Registrant};
use serde::Serialize;
use serde_json::Value;

use super::{decode_items, decode_one, into_body};
use crate::output::{format_time, PlainPrint, TableRow};

/// Registrant information.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrantInfo {
    pub key: String,
    pub name: String,
    pub email: String,
    pub status: String,
    pub registered: String,
    pub join_url: String,
}

impl From<&Registrant> for RegistrantInfo {
    fn from(r: &Registrant) -> Self {
        Self {
            key: r.registrant_key.to_string(),
            name: r.full_name(),
            email: r.email.clone(),
            status: r.status.clone(),
            registered: r.registration_date.clone(),
            join_url: r.join_url.clone(),
        }
    }
}

impl TableRow for RegistrantInfo {
    fn headers() -> Vec<&'static str> {
        vec!["Key", "Name", "Email", "Status", "Registered"]
    }
    fn row(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.name.clone(),
            self.email.clone(),
            self.status.clone(),
            format_time(&self.registered),
        ]
    }
}

impl PlainPrint for RegistrantInfo {
    fn plain_print(&self) {
        let status = match self.status.as_str() {
            "APPROVED" => self.status.green(),
            "DENIED" => self.status.red(),
            _ => self.status.yellow(),
        };
        println!(
            "[{}] {} <{}> {}",
            self.key.cyan(),
            self.name.bold(),
            self.email,
            status
        );
        if !self.join_url.is_empty() {
            println!("   {}", self.join_url.dimmed());
        }
    }
}

/// Registrants of a webinar.
pub async fn list(client: &GTWClient, webinar: &str) -> Result<Vec<RegistrantInfo>> {
    let registrants: Vec<Registrant> = decode_items(client.registrants().list(webinar).await?)?;
    Ok(registrants.iter().map(RegistrantInfo::from).collect())
}

/// One registrant.
pub async fn get(client: &GTWClient, webinar: &str, registrant: &str) -> Result<RegistrantInfo> {
    let registrant: Registrant =
        decode_one(client.registrants().get(webinar, registrant).await?)?;
    Ok(RegistrantInfo::from(&registrant))
}

/// Options of a create registrant call.
#[derive(Debug, Clone)]
pub struct RegistrantForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub fields: Vec<(String, String)>,
    pub resend_confirmation: bool,
}

/// Register someone and return the key and join URL.
pub async fn create(
    client: &GTWClient,
    webinar: &str,
    form: RegistrantForm,
) -> Result<CreatedRegistrant> {
    let mut builder = client
        .registrants()
        .create(webinar, &form.first_name, &form.last_name, &form.email)
        .resend_confirmation(form.resend_confirmation);
    for (name, value) in form.fields {
        builder = builder.field(name, value);
    }
    decode_one(builder.send().await?)
}

/// Remove a registrant.
pub async fn delete(client: &GTWClient, webinar: &str, registrant: &str) -> Result<()> {
    into_body(client.registrants().delete(webinar, registrant).await?)?;
    Ok(())
}

/// Registration form definition.
pub async fn fields(client: &GTWClient, webinar: &str) -> Result<Value> {
    into_body(client.registrants().fields(webinar).await?)
}

/// Parse `name=value` pairs.
pub fn parse_fields(values: &[String]) -> Result<Vec<(String, String)>> {
    values
        .iter()
        .map(|value| match value.split_once('=') {
            Some((name, v)) if !name.is_empty() => Ok((name.to_string(), v.to_string())),
            _ => anyhow::bail!("invalid field '{value}', expected NAME=VALUE"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields(&[
            "organization=Analytical Engines".to_string(),
            "phone=".to_string(),
        ])
        .unwrap();
        assert_eq!(
            fields,
            vec![
                ("organization".to_string(), "Analytical Engines".to_string()),
                ("phone".to_string(), String::new()),
            ]
        );

        assert!(parse_fields(&["=x".to_string()]).is_err());
        assert!(parse_fields(&["novalue".to_string()]).is_err());
    }
}
