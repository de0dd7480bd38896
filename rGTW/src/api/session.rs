//! Session API.
//!
//! Sessions are the completed occurrences of a webinar.

use std::sync::Arc;

use super::operations::{self as ops, Operation};
use crate::{
    client::{GTWClientInner, Reply, RequestOptions},
    error::Result,
    models::{RegistrantKey, SessionKey, WebinarKey},
};

/// API for session operations.
pub struct SessionApi {
    client: Arc<GTWClientInner>,
}

impl SessionApi {
    pub(crate) fn new(client: Arc<GTWClientInner>) -> Self {
        Self { client }
    }

    /// Completed sessions of all the organizer's webinars in a date range.
    pub async fn organizer(&self, from_time: &str, to_time: &str) -> Result<Reply> {
        let options = RequestOptions::new()
            .query("fromTime", from_time)
            .query("toTime", to_time);
        self.client
            .execute(&ops::GET_ORGANIZER_SESSIONS, &[], options)
            .await
    }

    /// Past sessions of a webinar.
    pub async fn list(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        let webinar_key = webinar_key.into();
        self.client
            .execute(
                &ops::GET_SESSIONS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new(),
            )
            .await
    }

    /// Attendance details of one session.
    pub async fn get(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
    ) -> Result<Reply> {
        self.session(&ops::GET_SESSION, webinar_key.into(), session_key.into())
            .await
    }

    /// Performance details of one session.
    pub async fn performance(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
    ) -> Result<Reply> {
        self.session(&ops::GET_SESSION_PERFORMANCE, webinar_key.into(), session_key.into())
            .await
    }

    /// Collated poll questions and answers.
    pub async fn polls(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
    ) -> Result<Reply> {
        self.session(&ops::GET_SESSION_POLLS, webinar_key.into(), session_key.into())
            .await
    }

    /// Questions asked during the session.
    pub async fn questions(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
    ) -> Result<Reply> {
        self.session(&ops::GET_SESSION_QUESTIONS, webinar_key.into(), session_key.into())
            .await
    }

    /// Surveys of the session.
    pub async fn surveys(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
    ) -> Result<Reply> {
        self.session(&ops::GET_SESSION_SURVEYS, webinar_key.into(), session_key.into())
            .await
    }

    /// Attendees of the session.
    pub async fn attendees(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
    ) -> Result<Reply> {
        self.session(&ops::GET_SESSION_ATTENDEES, webinar_key.into(), session_key.into())
            .await
    }

    /// Registration details of one attendee.
    pub async fn attendee(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
        registrant_key: impl Into<RegistrantKey>,
    ) -> Result<Reply> {
        self.attendee_op(
            &ops::GET_SESSION_ATTENDEE,
            webinar_key.into(),
            session_key.into(),
            registrant_key.into(),
        )
        .await
    }

    /// Poll answers of one attendee.
    pub async fn attendee_polls(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
        registrant_key: impl Into<RegistrantKey>,
    ) -> Result<Reply> {
        self.attendee_op(
            &ops::GET_SESSION_ATTENDEE_POLLS,
            webinar_key.into(),
            session_key.into(),
            registrant_key.into(),
        )
        .await
    }

    /// Questions asked by one attendee.
    pub async fn attendee_questions(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
        registrant_key: impl Into<RegistrantKey>,
    ) -> Result<Reply> {
        self.attendee_op(
            &ops::GET_SESSION_ATTENDEE_QUESTIONS,
            webinar_key.into(),
            session_key.into(),
            registrant_key.into(),
        )
        .await
    }

    /// Survey answers of one attendee.
    pub async fn attendee_surveys(
        &self,
        webinar_key: impl Into<WebinarKey>,
        session_key: impl Into<SessionKey>,
        registrant_key: impl Into<RegistrantKey>,
    ) -> Result<Reply> {
        self.attendee_op(
            &ops::GET_SESSION_ATTENDEE_SURVEYS,
            webinar_key.into(),
            session_key.into(),
            registrant_key.into(),
        )
        .await
    }

    async fn session(
        &self,
        op: &Operation,
        webinar_key: WebinarKey,
        session_key: SessionKey,
    ) -> Result<Reply> {
        self.client
            .execute(
                op,
                &[
                    ("webinarKey", webinar_key.as_str()),
                    ("sessionKey", session_key.as_str()),
                ],
                RequestOptions::new(),
            )
            .await
    }

    async fn attendee_op(
        &self,
        op: &Operation,
        webinar_key: WebinarKey,
        session_key: SessionKey,
        registrant_key: RegistrantKey,
    ) -> Result<Reply> {
        self.client
            .execute(
                op,
                &[
                    ("webinarKey", webinar_key.as_str()),
                    ("sessionKey", session_key.as_str()),
                    ("registrantKey", registrant_key.as_str()),
                ],
                RequestOptions::new(),
            )
            .await
    }
}
