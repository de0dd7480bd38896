//! Credentials and access token lifecycle.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::http::{HttpExecutor, HttpMethod, RequestOptions};
use crate::error::{Error, Result};
use crate::models::flexible;

/// Long-lived credentials used for the password grant.
#[derive(Clone)]
pub struct Credentials {
    /// Account user name (email).
    pub username: String,
    /// Account password.
    pub password: String,
    /// Developer application consumer key.
    pub consumer_key: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            consumer_key: consumer_key.into(),
        }
    }

    /// Fail if any field is empty.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("username", &self.username),
            ("password", &self.password),
            ("consumerKey", &self.consumer_key),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::config(format!(
                "missing required credentials: {}",
                missing.join(", ")
            )))
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("consumer_key", &self.consumer_key)
            .finish()
    }
}

/// Cached authentication data.
///
/// Export it with [`GTWClient::auth`](crate::GTWClient::auth) and hand it
/// back to [`GTWClientBuilder::auth`](crate::GTWClientBuilder::auth) to skip
/// the token round trip on the next run.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthState {
    /// Token sent in the `Authorization` header. Empty when unauthenticated.
    pub access_token: String,
    /// Absolute expiry, epoch seconds.
    pub expires_in: i64,
    /// Returned by the token endpoint but never used for renewal.
    pub refresh_token: String,
    /// Organizer that scopes `organizers/...` calls.
    pub organizer_key: String,
    /// Account that scopes `accounts/...` calls.
    pub account_key: String,
}

impl AuthState {
    /// Fully populated and not expired at `now` (epoch seconds).
    pub fn is_valid_at(&self, now: i64) -> bool {
        !self.access_token.is_empty()
            && !self.organizer_key.is_empty()
            && !self.account_key.is_empty()
            && self.expires_in > now
    }

    /// Fully populated and not expired right now.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now().timestamp())
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |s: &String| if s.is_empty() { "" } else { "***" };
        f.debug_struct("AuthState")
            .field("access_token", &redact(&self.access_token))
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &redact(&self.refresh_token))
            .field("organizer_key", &self.organizer_key)
            .field("account_key", &self.account_key)
            .finish()
    }
}

/// Fields of a successful token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    /// Relative lifetime in seconds.
    #[serde(default, deserialize_with = "flexible::int")]
    expires_in: i64,
    #[serde(default, deserialize_with = "flexible::string")]
    refresh_token: String,
    #[serde(default, deserialize_with = "flexible::string")]
    organizer_key: String,
    #[serde(default, deserialize_with = "flexible::string")]
    account_key: String,
}

impl TokenResponse {
    fn into_state(self, now: i64) -> Result<AuthState> {
        for (name, value) in [
            ("access_token", &self.access_token),
            ("organizer_key", &self.organizer_key),
            ("account_key", &self.account_key),
        ] {
            if value.is_empty() {
                return Err(Error::auth(None, format!("token response missing {name}")));
            }
        }

        Ok(AuthState {
            access_token: self.access_token,
            expires_in: now.saturating_add(self.expires_in),
            refresh_token: self.refresh_token,
            organizer_key: self.organizer_key,
            account_key: self.account_key,
        })
    }
}

/// Hook invoked with the new state after each successful authentication.
pub type AuthHook = Arc<dyn Fn(&AuthState) + Send + Sync>;

/// Owns the credentials and the cached [`AuthState`].
///
/// Readers take a short read lock. The authenticate-and-replace sequence runs
/// under `refresh`, so concurrent callers that find the state invalid wait for
/// one round trip instead of starting their own.
pub(crate) struct TokenManager {
    credentials: Credentials,
    state: RwLock<AuthState>,
    refresh: Mutex<()>,
    on_refresh: Option<AuthHook>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, state: AuthState, on_refresh: Option<AuthHook>) -> Self {
        Self {
            credentials,
            state: RwLock::new(state),
            refresh: Mutex::new(()),
            on_refresh,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Snapshot of the cached state.
    pub fn snapshot(&self) -> AuthState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn valid_snapshot(&self) -> Option<AuthState> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .is_valid_at(Utc::now().timestamp())
            .then(|| state.clone())
    }

    /// Return a valid state, authenticating first if needed.
    pub async fn valid_state(&self, executor: &HttpExecutor<'_>) -> Result<AuthState> {
        if let Some(state) = self.valid_snapshot() {
            return Ok(state);
        }

        let _guard = self.refresh.lock().await;

        // Another caller may have finished a refresh while we waited.
        if let Some(state) = self.valid_snapshot() {
            return Ok(state);
        }

        let fresh = self.authenticate(executor).await?;
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();

        if let Some(hook) = &self.on_refresh {
            hook(&fresh);
        }

        Ok(fresh)
    }

    /// Run the password grant against the token endpoint.
    async fn authenticate(&self, executor: &HttpExecutor<'_>) -> Result<AuthState> {
        let creds = &self.credentials;
        log::info!("Authenticating {} with password grant", creds.username);

        let options = RequestOptions::new().form(&[
            ("grant_type", "password"),
            ("user_id", creds.username.as_str()),
            ("password", creds.password.as_str()),
            ("client_id", creds.consumer_key.as_str()),
        ]);

        let token_path = executor.config().token_path.clone();
        let raw = executor
            .send(HttpMethod::Post, &token_path, &options, None)
            .await
            .map_err(|e| match e {
                Error::Transport(err) => Error::auth_transport(err),
                other => other,
            })?;

        if !raw.outcome.is_success() {
            log::warn!("Authentication rejected: {}", raw.outcome);
            return Err(Error::auth(
                Some(raw.outcome.status_code),
                raw.outcome.reason_phrase,
            ));
        }

        let token: TokenResponse = serde_json::from_str(&raw.text).map_err(|e| {
            Error::auth(
                Some(raw.outcome.status_code),
                format!("malformed token response: {e}"),
            )
        })?;

        let state = token.into_state(Utc::now().timestamp())?;
        log::debug!(
            "Authenticated organizer {} (account {}), token valid until {}",
            state.organizer_key,
            state.account_key,
            state.expires_in
        );

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn populated(expires_in: i64) -> AuthState {
        AuthState {
            access_token: "token".into(),
            expires_in,
            refresh_token: "refresh".into(),
            organizer_key: "100".into(),
            account_key: "200".into(),
        }
    }

    #[test]
    fn test_credentials_validation() {
        assert!(Credentials::new("user", "pass", "key").validate().is_ok());

        let err = Credentials::new("", "pass", " ").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: missing required credentials: username, consumerKey"
        );
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("user", "hunter2", "key"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_auth_state_validity() {
        let now = 1_700_000_000;

        assert!(populated(now + 1).is_valid_at(now));
        assert!(!populated(now).is_valid_at(now));
        assert!(!AuthState::default().is_valid_at(now));

        for clear in 0..3 {
            let mut state = populated(now + 3600);
            match clear {
                0 => state.access_token.clear(),
                1 => state.organizer_key.clear(),
                _ => state.account_key.clear(),
            }
            assert!(!state.is_valid_at(now));
        }
    }

    #[test]
    fn test_auth_state_partial_cache() {
        let state: AuthState =
            serde_json::from_str(r#"{"accessToken":"abc","organizerKey":"100"}"#).unwrap();

        assert_eq!(state.access_token, "abc");
        assert_eq!(state.organizer_key, "100");
        assert_eq!(state.account_key, "");
        assert_eq!(state.expires_in, 0);
    }

    #[test]
    fn test_token_response_into_state() {
        let token: TokenResponse = serde_json::from_str(
            r#"{
                "access_token": "new-token",
                "expires_in": "3600",
                "refresh_token": "r",
                "organizer_key": 300000000000123,
                "account_key": "456"
            }"#,
        )
        .unwrap();

        let state = token.into_state(1_000).unwrap();
        assert_eq!(
            state,
            AuthState {
                access_token: "new-token".into(),
                expires_in: 4_600,
                refresh_token: "r".into(),
                organizer_key: "300000000000123".into(),
                account_key: "456".into(),
            }
        );
    }

    #[test]
    fn test_token_response_missing_key() {
        let token: TokenResponse =
            serde_json::from_str(r#"{"access_token":"t","expires_in":60,"account_key":"1"}"#)
                .unwrap();

        let err = token.into_state(0).unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("organizer_key"));
    }
}
