//! Webinar models.

use serde::{Deserialize, Serialize};

use super::WebinarKey;

/// Start and end of one webinar meeting, ISO 8601 UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// e.g. `2024-01-01T10:00:00Z`
    pub start_time: String,
    pub end_time: String,
}

impl TimeRange {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// How meeting times relate to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebinarType {
    /// One session.
    #[default]
    SingleSession,
    /// Multiple meetings attended by the same audience.
    Sequence,
    /// Multiple meetings where attendees choose one.
    Series,
}

impl WebinarType {
    /// Value sent on the wire.
    pub fn param(&self) -> &'static str {
        match self {
            WebinarType::SingleSession => "single_session",
            WebinarType::Sequence => "sequence",
            WebinarType::Series => "series",
        }
    }
}

impl std::str::FromStr for WebinarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_session" => Ok(WebinarType::SingleSession),
            "sequence" => Ok(WebinarType::Sequence),
            "series" => Ok(WebinarType::Series),
            other => Err(format!("unknown webinar type: {other}")),
        }
    }
}

/// Body of the create and update webinar calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarDefinition {
    pub subject: String,
    pub description: String,
    pub times: Vec<TimeRange>,
    pub time_zone: String,
    #[serde(rename = "type")]
    pub webinar_type: WebinarType,
    pub is_password_protected: bool,
}

/// Response of the create webinar call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedWebinar {
    pub webinar_key: WebinarKey,
}

/// A webinar as returned by the list and get calls.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webinar {
    pub webinar_key: WebinarKey,
    pub subject: String,
    pub description: String,
    pub times: Vec<TimeRange>,
    pub time_zone: String,
    pub registration_url: Option<String>,
}

impl Webinar {
    /// Start of the first meeting, if any.
    pub fn first_start(&self) -> Option<&str> {
        self.times.first().map(|t| t.start_time.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_definition_wire_names() {
        let def = WebinarDefinition {
            subject: "T".into(),
            description: "D".into(),
            times: vec![TimeRange::new("2024-01-01T10:00:00Z", "2024-01-01T11:00:00Z")],
            time_zone: "UTC".into(),
            webinar_type: WebinarType::default(),
            is_password_protected: false,
        };

        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({
                "subject": "T",
                "description": "D",
                "times": [{
                    "startTime": "2024-01-01T10:00:00Z",
                    "endTime": "2024-01-01T11:00:00Z"
                }],
                "timeZone": "UTC",
                "type": "single_session",
                "isPasswordProtected": false
            })
        );
    }

    #[test]
    fn test_webinar_from_listing() {
        let webinar: Webinar = serde_json::from_value(json!({
            "webinarKey": 5_142_664_092_244_126_000_u64,
            "subject": "Quarterly update",
            "times": [{ "startTime": "2024-03-01T15:00:00Z", "endTime": "2024-03-01T16:00:00Z" }],
            "timeZone": "Europe/Berlin",
            "organizerKey": 100
        }))
        .unwrap();

        assert_eq!(webinar.webinar_key.as_str(), "5142664092244126000");
        assert_eq!(webinar.first_start(), Some("2024-03-01T15:00:00Z"));
        assert_eq!(webinar.description, "");
        assert!(webinar.registration_url.is_none());
    }

    #[test]
    fn test_webinar_type_parse() {
        assert_eq!("series".parse::<WebinarType>(), Ok(WebinarType::Series));
        assert!("weekly".parse::<WebinarType>().is_err());
        assert_eq!(WebinarType::Sequence.param(), "sequence");
    }
}
