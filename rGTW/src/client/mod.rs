//! HTTP client, token manager and dispatch.

mod auth;
mod http;
mod outcome;

pub use auth::{AuthHook, AuthState, Credentials};
pub use http::{
    media_types, HttpConfig, HttpMethod, RegistrantFields, RequestOptions, DEFAULT_BASE_URL,
    DEFAULT_TOKEN_PATH,
};
pub use outcome::{CallOutcome, Reply};

use crate::api::{
    CoOrganizerApi, Operation, PanelistApi, RegistrantApi, Scope, SessionApi, WebinarApi,
};
use crate::error::{Error, Result};
use auth::TokenManager;
use http::{build_client, HttpExecutor};
use outcome::LastOutcome;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating GTWClient.
pub struct GTWClientBuilder {
    credentials: Option<Credentials>,
    auth: AuthState,
    http_config: HttpConfig,
    on_auth_refresh: Option<AuthHook>,
}

impl std::fmt::Debug for GTWClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GTWClientBuilder")
            .field("credentials", &self.credentials)
            .field("auth", &self.auth)
            .field("http_config", &self.http_config)
            .field("on_auth_refresh", &self.on_auth_refresh.as_ref().map(|_| "..."))
            .finish()
    }
}

impl Default for GTWClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GTWClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            credentials: None,
            auth: AuthState::default(),
            http_config: HttpConfig::default(),
            on_auth_refresh: None,
        }
    }

    /// Set the password-grant credentials. Required.
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(username, password, consumer_key));
        self
    }

    /// Set credentials from a Credentials value.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Seed the token cache with a previously exported state.
    pub fn auth(mut self, auth: AuthState) -> Self {
        self.auth = auth;
        self
    }

    /// Set base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.http_config.base_url = url.into();
        self
    }

    /// Set token endpoint path, relative to the base URL.
    pub fn token_path(mut self, path: impl Into<String>) -> Self {
        self.http_config.token_path = path.into();
        self
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.user_agent = Some(ua.into());
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    /// Set read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.read_timeout = timeout;
        self
    }

    /// Choose the create registrant call version.
    pub fn registrant_fields(mut self, fields: RegistrantFields) -> Self {
        self.http_config.registrant_fields = fields;
        self
    }

    /// Called with the new state after every successful authentication.
    pub fn on_auth_refresh<F>(mut self, hook: F) -> Self
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        self.on_auth_refresh = Some(Arc::new(hook));
        self
    }

    /// Build GTWClient.
    pub fn build(self) -> Result<GTWClient> {
        let credentials = self.credentials.ok_or_else(|| {
            Error::config("missing required credentials: username, password, consumerKey")
        })?;
        credentials.validate()?;

        self.http_config.base().map_err(|e| {
            Error::config(format!(
                "invalid base URL {:?}: {e}",
                self.http_config.base_url
            ))
        })?;

        let http_client = build_client(&self.http_config)?;

        Ok(GTWClient {
            inner: Arc::new(GTWClientInner {
                http: http_client,
                config: self.http_config,
                tokens: TokenManager::new(credentials, self.auth, self.on_auth_refresh),
                last: LastOutcome::default(),
            }),
        })
    }
}

/// Internal client state.
pub(crate) struct GTWClientInner {
    pub http: reqwest::Client,
    pub config: HttpConfig,
    pub tokens: TokenManager,
    pub last: LastOutcome,
}

impl GTWClientInner {
    /// Create HTTP executor.
    pub fn executor(&self) -> HttpExecutor<'_> {
        HttpExecutor::new(&self.http, &self.config, &self.last)
    }

    /// Cached state if valid, otherwise a freshly authenticated one.
    pub async fn valid_auth(&self) -> Result<AuthState> {
        self.tokens.valid_state(&self.executor()).await
    }

    /// Dispatch one operation.
    ///
    /// Scope key and token come from the same snapshot, so a request never
    /// pairs an old organizer key with a new token.
    pub async fn execute(
        &self,
        op: &Operation,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<Reply> {
        let auth = self.valid_auth().await?;
        let scope_key = match op.scope {
            Scope::Organizer => &auth.organizer_key,
            Scope::Account => &auth.account_key,
        };

        let path = op.render(scope_key, params)?;
        let token = op.authenticated.then_some(auth.access_token.as_str());

        log::debug!("{} {} [{}]", op.method, path, op.name);
        let reply = self
            .executor()
            .send(op.method, &path, &options, token)
            .await?
            .into_reply()?;

        if let Reply::Failure(outcome) = &reply {
            log::warn!("{} failed: {}", op.name, outcome);
        }

        Ok(reply)
    }
}

/// GoToWebinar client.
///
/// Cheap to clone; clones share the token cache and the last outcome.
#[derive(Clone)]
pub struct GTWClient {
    pub(crate) inner: Arc<GTWClientInner>,
}

impl GTWClient {
    /// Create a new client builder.
    pub fn builder() -> GTWClientBuilder {
        GTWClientBuilder::new()
    }

    /// Get the webinar API.
    pub fn webinars(&self) -> WebinarApi {
        WebinarApi::new(self.inner.clone())
    }

    /// Get the session API.
    pub fn sessions(&self) -> SessionApi {
        SessionApi::new(self.inner.clone())
    }

    /// Get the registrant API.
    pub fn registrants(&self) -> RegistrantApi {
        RegistrantApi::new(self.inner.clone())
    }

    /// Get the panelist API.
    pub fn panelists(&self) -> PanelistApi {
        PanelistApi::new(self.inner.clone())
    }

    /// Get the co-organizer API.
    pub fn co_organizers(&self) -> CoOrganizerApi {
        CoOrganizerApi::new(self.inner.clone())
    }

    /// Valid access token, authenticating first if needed.
    pub async fn access_token(&self) -> Result<String> {
        Ok(self.inner.valid_auth().await?.access_token)
    }

    /// Organizer key, authenticating first if needed.
    pub async fn organizer_key(&self) -> Result<String> {
        Ok(self.inner.valid_auth().await?.organizer_key)
    }

    /// Account key, authenticating first if needed.
    pub async fn account_key(&self) -> Result<String> {
        Ok(self.inner.valid_auth().await?.account_key)
    }

    /// Snapshot of the token cache, for persisting between runs.
    pub fn auth(&self) -> AuthState {
        self.inner.tokens.snapshot()
    }

    /// Check if the cached state is currently valid.
    pub fn is_authenticated(&self) -> bool {
        self.auth().is_valid()
    }

    /// Credentials the client authenticates with.
    pub fn credentials(&self) -> &Credentials {
        self.inner.tokens.credentials()
    }

    /// Status line of the most recent HTTP exchange.
    pub fn last_outcome(&self) -> Option<CallOutcome> {
        self.inner.last.get()
    }

    /// Status code of the most recent HTTP exchange.
    pub fn status_code(&self) -> Option<u16> {
        self.last_outcome().map(|o| o.status_code)
    }

    /// Reason phrase of the most recent HTTP exchange.
    pub fn reason_phrase(&self) -> Option<String> {
        self.last_outcome().map(|o| o.reason_phrase)
    }

    /// Dispatch any operation from [`operations`](crate::api::operations).
    pub async fn execute(
        &self,
        op: &Operation,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<Reply> {
        self.inner.execute(op, params, options).await
    }
}

impl std::fmt::Debug for GTWClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GTWClient")
            .field("authenticated", &self.is_authenticated())
            .field("base_url", &self.inner.config.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_requires_credentials() {
        let err = GTWClient::builder().build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        for (user, pass, key) in [("", "p", "k"), ("u", "", "k"), ("u", "p", "")] {
            let err = GTWClient::builder()
                .credentials(user, pass, key)
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "{user}/{pass}/{key}");
        }
    }

    #[test]
    fn test_build_with_defaults() {
        let client = GTWClient::builder()
            .credentials("user", "pass", "key")
            .build()
            .unwrap();

        assert_eq!(client.auth(), AuthState::default());
        assert!(!client.is_authenticated());
        assert_eq!(client.status_code(), None);
        assert_eq!(client.reason_phrase(), None);
    }

    #[test]
    fn test_build_with_cached_auth() {
        let cached = AuthState {
            access_token: "cached".into(),
            expires_in: chrono::Utc::now().timestamp() + 3600,
            refresh_token: String::new(),
            organizer_key: "100".into(),
            account_key: "200".into(),
        };
        let client = GTWClient::builder()
            .credentials("user", "pass", "key")
            .auth(cached.clone())
            .build()
            .unwrap();

        assert!(client.is_authenticated());
        assert_eq!(client.auth(), cached);
    }

    #[test]
    fn test_build_rejects_bad_base_url() {
        let err = GTWClient::builder()
            .credentials("user", "pass", "key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let builder = GTWClient::builder().credentials("user", "hunter2", "key");
        assert!(!format!("{:?}", builder).contains("hunter2"));
    }
}
