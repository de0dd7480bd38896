//! Panelist API.

use std::sync::Arc;

use super::operations as ops;
use crate::{
    client::{GTWClientInner, Reply, RequestOptions},
    error::{Error, Result},
    models::{NewPanelist, PanelistKey, WebinarKey},
};

/// API for panelist operations.
pub struct PanelistApi {
    client: Arc<GTWClientInner>,
}

impl PanelistApi {
    pub(crate) fn new(client: Arc<GTWClientInner>) -> Self {
        Self { client }
    }

    /// Panelists of a webinar.
    pub async fn list(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        let webinar_key = webinar_key.into();
        self.client
            .execute(
                &ops::GET_PANELISTS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new(),
            )
            .await
    }

    /// Add panelists to a webinar.
    pub async fn create(
        &self,
        webinar_key: impl Into<WebinarKey>,
        panelists: Vec<NewPanelist>,
    ) -> Result<Reply> {
        if panelists.is_empty() {
            return Err(Error::InvalidArgument(
                "createPanelists: at least one panelist is required".into(),
            ));
        }

        let webinar_key = webinar_key.into();
        let body = serde_json::json!({ "panelists": serde_json::to_value(&panelists)? });
        self.client
            .execute(
                &ops::CREATE_PANELISTS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new().json(body),
            )
            .await
    }

    /// Remove a panelist.
    pub async fn delete(
        &self,
        webinar_key: impl Into<WebinarKey>,
        panelist_key: impl Into<PanelistKey>,
    ) -> Result<Reply> {
        self.by_key(&ops::DELETE_PANELIST, webinar_key.into(), panelist_key.into())
            .await
    }

    /// Resend the invitation email.
    pub async fn resend_invitation(
        &self,
        webinar_key: impl Into<WebinarKey>,
        panelist_key: impl Into<PanelistKey>,
    ) -> Result<Reply> {
        self.by_key(
            &ops::RESEND_PANELIST_INVITATION,
            webinar_key.into(),
            panelist_key.into(),
        )
        .await
    }

    async fn by_key(
        &self,
        op: &ops::Operation,
        webinar_key: WebinarKey,
        panelist_key: PanelistKey,
    ) -> Result<Reply> {
        self.client
            .execute(
                op,
                &[
                    ("webinarKey", webinar_key.as_str()),
                    ("panelistKey", panelist_key.as_str()),
                ],
                RequestOptions::new(),
            )
            .await
    }
}
