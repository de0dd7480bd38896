//! Registrant models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RegistrantKey;

/// Body of the create registrant call.
///
/// `extra` is only honoured by the API when the client is configured with
/// [`RegistrantFields::Extended`](crate::client::RegistrantFields::Extended).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistrant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewRegistrant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// Response of the create registrant call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRegistrant {
    pub registrant_key: RegistrantKey,
    pub join_url: String,
}

/// A registrant as returned by the list and get calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Registrant {
    pub registrant_key: RegistrantKey,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `WAITING`, `APPROVED` or `DENIED`.
    pub status: String,
    pub registration_date: String,
    pub join_url: String,
}

impl Registrant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_registrant_with_extra_fields() {
        let mut registrant = NewRegistrant::new("Ada", "Lovelace", "ada@example.com");
        registrant
            .extra
            .insert("organization".into(), json!("Analytical Engines"));

        assert_eq!(
            serde_json::to_value(&registrant).unwrap(),
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "organization": "Analytical Engines"
            })
        );
    }

    #[test]
    fn test_created_registrant() {
        let created: CreatedRegistrant = serde_json::from_value(json!({
            "registrantKey": 987654321,
            "joinUrl": "https://global.gotowebinar.com/join/1/2"
        }))
        .unwrap();

        assert_eq!(created.registrant_key.as_str(), "987654321");
    }

    #[test]
    fn test_registrant_full_name() {
        let registrant = Registrant {
            first_name: "Ada".into(),
            ..Default::default()
        };
        assert_eq!(registrant.full_name(), "Ada");
    }
}
