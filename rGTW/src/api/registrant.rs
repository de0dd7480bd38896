//! Registrant API.

use std::sync::Arc;

use serde_json::Value;

use super::operations as ops;
use crate::{
    client::{GTWClientInner, RegistrantFields, Reply, RequestOptions},
    error::Result,
    models::{NewRegistrant, RegistrantKey, WebinarKey},
};

/// API for registrant operations.
pub struct RegistrantApi {
    client: Arc<GTWClientInner>,
}

impl RegistrantApi {
    pub(crate) fn new(client: Arc<GTWClientInner>) -> Self {
        Self { client }
    }

    /// All registrants of a webinar, with a subset of their fields.
    pub async fn list(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        let webinar_key = webinar_key.into();
        self.client
            .execute(
                &ops::GET_REGISTRANTS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new(),
            )
            .await
    }

    /// Register an attendee.
    pub fn create(
        &self,
        webinar_key: impl Into<WebinarKey>,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> CreateRegistrantBuilder {
        CreateRegistrantBuilder {
            client: self.client.clone(),
            webinar_key: webinar_key.into(),
            registrant: NewRegistrant::new(first_name, last_name, email),
            resend_confirmation: false,
        }
    }

    /// Full registration details of one registrant.
    pub async fn get(
        &self,
        webinar_key: impl Into<WebinarKey>,
        registrant_key: impl Into<RegistrantKey>,
    ) -> Result<Reply> {
        let (webinar_key, registrant_key) = (webinar_key.into(), registrant_key.into());
        self.client
            .execute(
                &ops::GET_REGISTRANT,
                &[
                    ("webinarKey", webinar_key.as_str()),
                    ("registrantKey", registrant_key.as_str()),
                ],
                RequestOptions::new(),
            )
            .await
    }

    /// Remove a registrant from a future webinar.
    pub async fn delete(
        &self,
        webinar_key: impl Into<WebinarKey>,
        registrant_key: impl Into<RegistrantKey>,
    ) -> Result<Reply> {
        let (webinar_key, registrant_key) = (webinar_key.into(), registrant_key.into());
        self.client
            .execute(
                &ops::DELETE_REGISTRANT,
                &[
                    ("webinarKey", webinar_key.as_str()),
                    ("registrantKey", registrant_key.as_str()),
                ],
                RequestOptions::new(),
            )
            .await
    }

    /// Required, optional and custom registration fields.
    pub async fn fields(&self, webinar_key: impl Into<WebinarKey>) -> Result<Reply> {
        let webinar_key = webinar_key.into();
        self.client
            .execute(
                &ops::GET_REGISTRATION_FIELDS,
                &[("webinarKey", webinar_key.as_str())],
                RequestOptions::new(),
            )
            .await
    }
}

/// Builder for create registrant requests.
pub struct CreateRegistrantBuilder {
    client: Arc<GTWClientInner>,
    webinar_key: WebinarKey,
    registrant: NewRegistrant,
    resend_confirmation: bool,
}

impl CreateRegistrantBuilder {
    /// Resend the confirmation email when re-registering.
    pub fn resend_confirmation(mut self, resend: bool) -> Self {
        self.resend_confirmation = resend;
        self
    }

    /// Add an optional or custom field.
    ///
    /// Ignored by the API unless the client uses
    /// [`RegistrantFields::Extended`].
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.registrant.extra.insert(name.into(), value.into());
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Reply> {
        let fields = self.client.config.registrant_fields;
        if fields == RegistrantFields::Basic && !self.registrant.extra.is_empty() {
            log::warn!(
                "createRegistrant: {} extra field(s) are ignored by the basic call",
                self.registrant.extra.len()
            );
        }

        let options = RequestOptions::new()
            .query("resendConfirmation", self.resend_confirmation)
            .json(serde_json::to_value(&self.registrant)?)
            .accept(fields.accept());
        self.client
            .execute(
                &ops::CREATE_REGISTRANT,
                &[("webinarKey", self.webinar_key.as_str())],
                options,
            )
            .await
    }
}
