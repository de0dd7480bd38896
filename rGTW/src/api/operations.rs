//! Declarative table of every API operation.
//!
//! Each endpoint wrapper is a thin mapping onto one of these constants; the
//! HTTP verb, scope and path template live here and nowhere else.

use crate::client::HttpMethod;
use crate::error::{Error, Result};

/// Which key prefixes the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `organizers/{organizerKey}/...`
    Organizer,
    /// `accounts/{accountKey}/...`
    Account,
}

impl Scope {
    pub fn prefix(&self) -> &'static str {
        match self {
            Scope::Organizer => "organizers",
            Scope::Account => "accounts",
        }
    }
}

/// One remote API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation name, as in the API reference.
    pub name: &'static str,
    pub method: HttpMethod,
    pub scope: Scope,
    /// Path after the scope prefix, with `{placeholder}` segments.
    pub path: &'static str,
    /// Send the `Authorization` header.
    pub authenticated: bool,
}

impl Operation {
    pub const fn organizer(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            scope: Scope::Organizer,
            path,
            authenticated: true,
        }
    }

    pub const fn account(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            scope: Scope::Account,
            path,
            authenticated: true,
        }
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    /// Fill the template, producing a path relative to the base URL.
    pub fn render(&self, scope_key: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut path = String::with_capacity(self.path.len() + 48);
        path.push_str(self.scope.prefix());
        path.push('/');
        path.push_str(checked_segment(self.name, self.scope.prefix(), scope_key)?);
        path.push('/');

        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let len = rest[start..].find('}').ok_or_else(|| {
                Error::InvalidArgument(format!("{}: unterminated placeholder", self.name))
            })?;
            let name = &rest[start + 1..start + len];
            let value = params
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| *v)
                .unwrap_or_default();

            path.push_str(&rest[..start]);
            path.push_str(checked_segment(self.name, name, value)?);
            rest = &rest[start + len + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }
}

/// Keys go into the path verbatim, so only unreserved characters are allowed.
fn checked_segment<'v>(operation: &str, name: &str, value: &'v str) -> Result<&'v str> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{operation}: missing `{name}`"
        )));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
    {
        return Err(Error::InvalidArgument(format!(
            "{operation}: `{name}` contains characters not allowed in a key: {value:?}"
        )));
    }
    Ok(value)
}

use HttpMethod::{Delete, Get, Post, Put};

// Webinars
pub const GET_ACCOUNT_WEBINARS: Operation =
    Operation::account("getAccountWebinars", Get, "webinars");
pub const GET_HISTORICAL_WEBINARS: Operation =
    Operation::organizer("getHistoricalWebinars", Get, "historicalWebinars");
pub const GET_UPCOMING_WEBINARS: Operation =
    Operation::organizer("getUpcomingWebinars", Get, "upcomingWebinars");
pub const GET_ALL_WEBINARS: Operation = Operation::organizer("getAllWebinars", Get, "webinars");
pub const CREATE_WEBINAR: Operation = Operation::organizer("createWebinar", Post, "webinars");
pub const GET_WEBINAR: Operation = Operation::organizer("getWebinar", Get, "webinars/{webinarKey}");
pub const UPDATE_WEBINAR: Operation =
    Operation::organizer("updateWebinar", Put, "webinars/{webinarKey}");
pub const CANCEL_WEBINAR: Operation =
    Operation::organizer("cancelWebinar", Delete, "webinars/{webinarKey}");
pub const GET_ATTENDEES: Operation =
    Operation::organizer("getAttendees", Get, "webinars/{webinarKey}/attendees");
pub const GET_AUDIO: Operation =
    Operation::organizer("getAudio", Get, "webinars/{webinarKey}/audio");
pub const UPDATE_AUDIO: Operation =
    Operation::organizer("updateAudio", Post, "webinars/{webinarKey}/audio");
pub const GET_MEETING_TIMES: Operation =
    Operation::organizer("getMeetingTimes", Get, "webinars/{webinarKey}/meetingtimes");
pub const GET_PERFORMANCE: Operation =
    Operation::organizer("getPerformance", Get, "webinars/{webinarKey}/performance");

// Sessions
pub const GET_ORGANIZER_SESSIONS: Operation =
    Operation::organizer("getOrganizerSessions", Get, "sessions");
pub const GET_SESSIONS: Operation =
    Operation::organizer("getSessions", Get, "webinars/{webinarKey}/sessions");
pub const GET_SESSION: Operation =
    Operation::organizer("getSession", Get, "webinars/{webinarKey}/sessions/{sessionKey}");
pub const GET_SESSION_PERFORMANCE: Operation = Operation::organizer(
    "getSessionPerformance",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/performance",
);
pub const GET_SESSION_POLLS: Operation = Operation::organizer(
    "getSessionPolls",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/polls",
);
pub const GET_SESSION_QUESTIONS: Operation = Operation::organizer(
    "getSessionQuestions",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/questions",
);
pub const GET_SESSION_SURVEYS: Operation = Operation::organizer(
    "getSessionSurveys",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/surveys",
);
pub const GET_SESSION_ATTENDEES: Operation = Operation::organizer(
    "getSessionAttendees",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/attendees",
);
pub const GET_SESSION_ATTENDEE: Operation = Operation::organizer(
    "getSessionAttendee",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/attendees/{registrantKey}",
);
pub const GET_SESSION_ATTENDEE_POLLS: Operation = Operation::organizer(
    "getSessionAttendeePolls",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/attendees/{registrantKey}/polls",
);
pub const GET_SESSION_ATTENDEE_QUESTIONS: Operation = Operation::organizer(
    "getSessionAttendeeQuestions",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/attendees/{registrantKey}/questions",
);
pub const GET_SESSION_ATTENDEE_SURVEYS: Operation = Operation::organizer(
    "getSessionAttendeeSurveys",
    Get,
    "webinars/{webinarKey}/sessions/{sessionKey}/attendees/{registrantKey}/surveys",
);

// Co-organizers
pub const GET_CO_ORGANIZERS: Operation =
    Operation::organizer("getCoOrganizers", Get, "webinars/{webinarKey}/coorganizers");
pub const CREATE_CO_ORGANIZERS: Operation =
    Operation::organizer("createCoOrganizers", Post, "webinars/{webinarKey}/coorganizers");
pub const DELETE_CO_ORGANIZER: Operation = Operation::organizer(
    "deleteCoOrganizer",
    Delete,
    "webinars/{webinarKey}/coorganizers/{coorganizerKey}",
);
pub const RESEND_CO_ORGANIZER_INVITATION: Operation = Operation::organizer(
    "resendCoOrganizerInvitation",
    Post,
    "webinars/{webinarKey}/coorganizers/{coorganizerKey}/resendInvitation",
);

// Panelists
pub const GET_PANELISTS: Operation =
    Operation::organizer("getPanelists", Get, "webinars/{webinarKey}/panelists");
pub const CREATE_PANELISTS: Operation =
    Operation::organizer("createPanelists", Post, "webinars/{webinarKey}/panelists");
pub const DELETE_PANELIST: Operation = Operation::organizer(
    "deletePanelist",
    Delete,
    "webinars/{webinarKey}/panelists/{panelistKey}",
);
pub const RESEND_PANELIST_INVITATION: Operation = Operation::organizer(
    "resendPanelistInvitation",
    Post,
    "webinars/{webinarKey}/panelists/{panelistKey}/resendInvitation",
);

// Registrants
pub const GET_REGISTRANTS: Operation =
    Operation::organizer("getRegistrants", Get, "webinars/{webinarKey}/registrants");
pub const CREATE_REGISTRANT: Operation =
    Operation::organizer("createRegistrant", Post, "webinars/{webinarKey}/registrants");
pub const GET_REGISTRANT: Operation = Operation::organizer(
    "getRegistrant",
    Get,
    "webinars/{webinarKey}/registrants/{registrantKey}",
);
pub const DELETE_REGISTRANT: Operation = Operation::organizer(
    "deleteRegistrant",
    Delete,
    "webinars/{webinarKey}/registrants/{registrantKey}",
);
pub const GET_REGISTRATION_FIELDS: Operation = Operation::organizer(
    "getRegistrationFields",
    Get,
    "webinars/{webinarKey}/registrants/fields",
);

/// Every operation, in API reference order.
pub const ALL: &[Operation] = &[
    GET_ACCOUNT_WEBINARS,
    GET_HISTORICAL_WEBINARS,
    GET_UPCOMING_WEBINARS,
    GET_ALL_WEBINARS,
    CREATE_WEBINAR,
    GET_WEBINAR,
    UPDATE_WEBINAR,
    CANCEL_WEBINAR,
    GET_ATTENDEES,
    GET_AUDIO,
    UPDATE_AUDIO,
    GET_MEETING_TIMES,
    GET_PERFORMANCE,
    GET_ORGANIZER_SESSIONS,
    GET_SESSIONS,
    GET_SESSION,
    GET_SESSION_PERFORMANCE,
    GET_SESSION_POLLS,
    GET_SESSION_QUESTIONS,
    GET_SESSION_SURVEYS,
    GET_SESSION_ATTENDEES,
    GET_SESSION_ATTENDEE,
    GET_SESSION_ATTENDEE_POLLS,
    GET_SESSION_ATTENDEE_QUESTIONS,
    GET_SESSION_ATTENDEE_SURVEYS,
    GET_CO_ORGANIZERS,
    CREATE_CO_ORGANIZERS,
    DELETE_CO_ORGANIZER,
    RESEND_CO_ORGANIZER_INVITATION,
    GET_PANELISTS,
    CREATE_PANELISTS,
    DELETE_PANELIST,
    RESEND_PANELIST_INVITATION,
    GET_REGISTRANTS,
    CREATE_REGISTRANT,
    GET_REGISTRANT,
    DELETE_REGISTRANT,
    GET_REGISTRATION_FIELDS,
];

/// Look up an operation by its API reference name.
pub fn find(name: &str) -> Option<&'static Operation> {
    ALL.iter().find(|op| op.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_render_organizer_path() {
        let path = GET_SESSION_ATTENDEE_POLLS
            .render(
                "100",
                &[("webinarKey", "1"), ("sessionKey", "2"), ("registrantKey", "3")],
            )
            .unwrap();
        assert_eq!(
            path,
            "organizers/100/webinars/1/sessions/2/attendees/3/polls"
        );
    }

    #[test]
    fn test_render_account_path() {
        let path = GET_ACCOUNT_WEBINARS.render("200", &[]).unwrap();
        assert_eq!(path, "accounts/200/webinars");
    }

    #[test]
    fn test_render_missing_param() {
        let err = GET_WEBINAR.render("100", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: getWebinar: missing `webinarKey`"
        );

        let err = GET_WEBINAR.render("", &[("webinarKey", "1")]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_render_rejects_path_injection() {
        let err = GET_WEBINAR
            .render("100", &[("webinarKey", "1/../../accounts")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_table_is_consistent() {
        let names: HashSet<_> = ALL.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(ALL.len(), 38);

        for op in ALL {
            let params: Vec<(&str, &str)> =
                op.placeholders().into_iter().map(|p| (p, "1")).collect();
            let path = op.render("9", &params).unwrap();
            assert!(!path.contains('{'), "{} left a placeholder", op.name);
            assert!(op.authenticated);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("cancelWebinar"), Some(&CANCEL_WEBINAR));
        assert_eq!(find("cancelWebinar").map(|op| op.method), Some(HttpMethod::Delete));
        assert!(find("nope").is_none());
    }
}
