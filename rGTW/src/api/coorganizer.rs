//! Co-organizer API.

use std::sync::Arc;

use super::operations as ops;
use crate::{
    client::{GTWClientInner, Reply, RequestOptions},
    error::Result,
    models::{CoOrganizerKey, NewCoOrganizer, WebinarKey},
};

/// API for co-organizer operations.
pub struct CoOrganizerApi {
    client: Arc<GTWClientInner>,
}

impl CoOrganizerApi {
    pub(crate) fn new(client: Arc<GTWClientInner>) -> Self {
        Self { client }
    }

    /// Co-organizers of a webinar, without the original organizer.
    pub async fn list(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        let webinar_key = webinar_key.into();
        self.client
            .execute(
                &ops::GET_CO_ORGANIZERS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new(),
            )
            .await
    }

    /// Add a co-organizer.
    pub async fn create(
        &self,
        webinar_key: impl Into<WebinarKey>,
        co_organizer: NewCoOrganizer,
    ) -> Result<Reply> {
        let webinar_key = webinar_key.into();
        self.client
            .execute(
                &ops::CREATE_CO_ORGANIZERS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new().json(serde_json::to_value(&co_organizer)?),
            )
            .await
    }

    /// Remove a co-organizer. Set `external` for people without an account.
    pub async fn delete(
        &self,
        webinar_key: impl Into<WebinarKey>,
        co_organizer_key: impl Into<CoOrganizerKey>,
        external: bool,
    ) -> Result<Reply> {
        self.by_key(
            &ops::DELETE_CO_ORGANIZER,
            webinar_key.into(),
            co_organizer_key.into(),
            external,
        )
        .await
    }

    /// Resend the invitation email.
    pub async fn resend_invitation(
        &self,
        webinar_key: impl Into<WebinarKey>,
        co_organizer_key: impl Into<CoOrganizerKey>,
        external: bool,
    ) -> Result<Reply> {
        self.by_key(
            &ops::RESEND_CO_ORGANIZER_INVITATION,
            webinar_key.into(),
            co_organizer_key.into(),
            external,
        )
        .await
    }

    async fn by_key(
        &self,
        op: &ops::Operation,
        webinar_key: WebinarKey,
        co_organizer_key: CoOrganizerKey,
        external: bool,
    ) -> Result<Reply> {
        self.client
            .execute(
                op,
                &[
                    ("webinarKey", webinar_key.as_str()),
                    ("coorganizerKey", co_organizer_key.as_str()),
                ],
                RequestOptions::new().query("external", external),
            )
            .await
    }
}
