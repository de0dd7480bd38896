//! Webinar API.

use std::sync::Arc;

use super::operations as ops;
use crate::{
    client::{GTWClientInner, Reply, RequestOptions},
    error::Result,
    models::{AudioUpdate, TimeRange, WebinarDefinition, WebinarKey, WebinarType},
};

/// API for webinar operations.
pub struct WebinarApi {
    client: Arc<GTWClientInner>,
}

impl WebinarApi {
    pub(crate) fn new(client: Arc<GTWClientInner>) -> Self {
        Self { client }
    }

    /// List the account's webinars in a date range (ISO 8601 UTC).
    pub fn account(&self, from_time: &str, to_time: &str) -> AccountWebinarsBuilder {
        AccountWebinarsBuilder {
            client: self.client.clone(),
            from_time: from_time.to_owned(),
            to_time: to_time.to_owned(),
            page: 0,
            size: 20,
        }
    }

    /// Completed webinars of the organizer, including co-organized ones.
    pub async fn historical(&self, from_time: &str, to_time: &str) -> Result<Reply> {
        let options = RequestOptions::new()
            .query("fromTime", from_time)
            .query("toTime", to_time);
        self.client
            .execute(&ops::GET_HISTORICAL_WEBINARS, &[], options)
            .await
    }

    /// Future webinars of the organizer, including co-organized ones.
    pub async fn upcoming(&self) -> Result<Reply> {
        self.client
            .execute(&ops::GET_UPCOMING_WEBINARS, &[], RequestOptions::new())
            .await
    }

    /// All webinars of the organizer.
    pub async fn all(&self) -> Result<Reply> {
        self.client
            .execute(&ops::GET_ALL_WEBINARS, &[], RequestOptions::new())
            .await
    }

    /// Create a webinar.
    pub fn create(
        &self,
        subject: &str,
        description: &str,
        times: Vec<TimeRange>,
        time_zone: &str,
    ) -> CreateWebinarBuilder {
        CreateWebinarBuilder {
            client: self.client.clone(),
            definition: definition(subject, description, times, time_zone),
        }
    }

    /// Get one webinar. Cancelled webinars answer 404.
    pub async fn get(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        self.by_key(&ops::GET_WEBINAR, webinar_key.into()).await
    }

    /// Replace a webinar's full definition.
    pub fn update(
        &self,
        webinar_key: impl Into<WebinarKey>,
        subject: &str,
        description: &str,
        times: Vec<TimeRange>,
        time_zone: &str,
    ) -> UpdateWebinarBuilder {
        UpdateWebinarBuilder {
            client: self.client.clone(),
            webinar_key: webinar_key.into(),
            definition: definition(subject, description, times, time_zone),
            notify_participants: false,
        }
    }

    /// Cancel a webinar, deleting all scheduled sessions.
    pub fn cancel(&self, webinar_key: impl Into<WebinarKey>) -> CancelWebinarBuilder {
        CancelWebinarBuilder {
            client: self.client.clone(),
            webinar_key: webinar_key.into(),
            send_cancellation_emails: false,
        }
    }

    /// All attendees of all sessions.
    pub async fn attendees(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        self.by_key(&ops::GET_ATTENDEES, webinar_key.into()).await
    }

    /// Audio/conferencing settings.
    pub async fn audio(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        self.by_key(&ops::GET_AUDIO, webinar_key.into()).await
    }

    /// Update audio/conferencing settings.
    pub fn update_audio(
        &self,
        webinar_key: impl Into<WebinarKey>,
        audio: AudioUpdate,
    ) -> UpdateAudioBuilder {
        UpdateAudioBuilder {
            client: self.client.clone(),
            webinar_key: webinar_key.into(),
            audio,
            notify_participants: false,
        }
    }

    /// Meeting times.
    pub async fn meeting_times(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        self.by_key(&ops::GET_MEETING_TIMES, webinar_key.into()).await
    }

    /// Performance details for all sessions.
    pub async fn performance(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        self.by_key(&ops::GET_PERFORMANCE, webinar_key.into()).await
    }

    async fn by_key(&self, op: &ops::Operation, webinar_key: WebinarKey) -> Result<Reply> {
        self.client
            .execute(
                op,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new(),
            )
            .await
    }
}

fn definition(
    subject: &str,
    description: &str,
    times: Vec<TimeRange>,
    time_zone: &str,
) -> WebinarDefinition {
    WebinarDefinition {
        subject: subject.to_owned(),
        description: description.to_owned(),
        times,
        time_zone: time_zone.to_owned(),
        webinar_type: WebinarType::default(),
        is_password_protected: false,
    }
}

/// Builder for account webinar list requests.
pub struct AccountWebinarsBuilder {
    client: Arc<GTWClientInner>,
    from_time: String,
    to_time: String,
    page: u32,
    size: u32,
}

impl AccountWebinarsBuilder {
    /// Set the page number. The first page is 0.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Reply> {
        let options = RequestOptions::new()
            .query("fromTime", &self.from_time)
            .query("toTime", &self.to_time)
            .query("page", self.page)
            .query("size", self.size);
        self.client
            .execute(&ops::GET_ACCOUNT_WEBINARS, &[], options)
            .await
    }
}

/// Builder for create webinar requests.
pub struct CreateWebinarBuilder {
    client: Arc<GTWClientInner>,
    definition: WebinarDefinition,
}

impl CreateWebinarBuilder {
    /// Set the webinar type.
    pub fn webinar_type(mut self, webinar_type: WebinarType) -> Self {
        self.definition.webinar_type = webinar_type;
        self
    }

    /// Require a password to join.
    pub fn password_protected(mut self, protected: bool) -> Self {
        self.definition.is_password_protected = protected;
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Reply> {
        let options = RequestOptions::new().json(serde_json::to_value(&self.definition)?);
        self.client.execute(&ops::CREATE_WEBINAR, &[], options).await
    }
}

/// Builder for update webinar requests.
pub struct UpdateWebinarBuilder {
    client: Arc<GTWClientInner>,
    webinar_key: WebinarKey,
    definition: WebinarDefinition,
    notify_participants: bool,
}

impl UpdateWebinarBuilder {
    /// Set the webinar type.
    pub fn webinar_type(mut self, webinar_type: WebinarType) -> Self {
        self.definition.webinar_type = webinar_type;
        self
    }

    /// Require a password to join.
    pub fn password_protected(mut self, protected: bool) -> Self {
        self.definition.is_password_protected = protected;
        self
    }

    /// Send update emails to registrants.
    pub fn notify_participants(mut self, notify: bool) -> Self {
        self.notify_participants = notify;
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Reply> {
        let options = RequestOptions::new()
            .query("notifyParticipants", self.notify_participants)
            .json(serde_json::to_value(&self.definition)?);
        self.client
            .execute(
                &ops::UPDATE_WEBINAR,
                &[("webinarKey", self.webinar_key.as_str())],
                options,
            )
            .await
    }
}

/// Builder for cancel webinar requests.
pub struct CancelWebinarBuilder {
    client: Arc<GTWClientInner>,
    webinar_key: WebinarKey,
    send_cancellation_emails: bool,
}

impl CancelWebinarBuilder {
    /// Email registrants the default cancellation message.
    pub fn send_cancellation_emails(mut self, send: bool) -> Self {
        self.send_cancellation_emails = send;
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Reply> {
        let options =
            RequestOptions::new().query("sendCancellationEmails", self.send_cancellation_emails);
        self.client
            .execute(
                &ops::CANCEL_WEBINAR,
                &[("webinarKey", self.webinar_key.as_str())],
                options,
            )
            .await
    }
}

/// Builder for update audio requests.
pub struct UpdateAudioBuilder {
    client: Arc<GTWClientInner>,
    webinar_key: WebinarKey,
    audio: AudioUpdate,
    notify_participants: bool,
}

impl UpdateAudioBuilder {
    /// Notify participants of the change.
    pub fn notify_participants(mut self, notify: bool) -> Self {
        self.notify_participants = notify;
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Reply> {
        let options = RequestOptions::new()
            .query("notifyParticipants", self.notify_participants)
            .json(serde_json::to_value(&self.audio)?);
        self.client
            .execute(
                &ops::UPDATE_AUDIO,
                &[("webinarKey", self.webinar_key.as_str())],
                options,
            )
            .await
    }
}
