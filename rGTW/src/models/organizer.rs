//! Co-organizer and panelist models.

use serde::Serialize;

/// Body of the create co-organizer call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCoOrganizer {
    /// `true` for people without a GoToWebinar account.
    pub external: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_key: Option<String>,
    /// There is no surname field; pass the full name here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewCoOrganizer {
    /// Co-organizer with a GoToWebinar account.
    pub fn internal(organizer_key: impl Into<String>) -> Self {
        Self {
            external: false,
            organizer_key: Some(organizer_key.into()),
            given_name: None,
            email: None,
        }
    }

    /// Co-organizer without a GoToWebinar account.
    pub fn external(given_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            external: true,
            organizer_key: None,
            given_name: Some(given_name.into()),
            email: Some(email.into()),
        }
    }
}

/// One entry of the create panelists call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPanelist {
    pub name: String,
    pub email: String,
}

impl NewPanelist {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_co_organizer_bodies() {
        assert_eq!(
            serde_json::to_value(NewCoOrganizer::internal("100")).unwrap(),
            json!({ "external": false, "organizerKey": "100" })
        );
        assert_eq!(
            serde_json::to_value(NewCoOrganizer::external("Grace Hopper", "grace@example.com"))
                .unwrap(),
            json!({ "external": true, "givenName": "Grace Hopper", "email": "grace@example.com" })
        );
    }
}
