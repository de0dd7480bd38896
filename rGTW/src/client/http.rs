//! HTTP client configuration and request execution.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

use super::outcome::{CallOutcome, LastOutcome, Reply};
use crate::error::{Error, Result};

/// Default GoToWebinar API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.getgo.com/G2W/rest/";

/// Token endpoint, relative to the base URL.
pub const DEFAULT_TOKEN_PATH: &str = "oauth/access_token";

/// Media types understood by the API.
pub mod media_types {
    pub const JSON: &str = "application/json";
    /// Selects the v1.1 "create registrant" call that accepts every field.
    pub const REGISTRANT_V1_1: &str = "application/vnd.citrix.g2wapi-v1.1+json";
}

/// Which version of the "create registrant" call to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrantFields {
    /// Accepts first name, last name and email only.
    #[default]
    Basic,
    /// Accepts all required, optional and custom registration fields.
    Extended,
}

impl RegistrantFields {
    /// Accept header for the create registrant call.
    pub fn accept(&self) -> &'static str {
        match self {
            RegistrantFields::Basic => media_types::JSON,
            RegistrantFields::Extended => media_types::REGISTRANT_V1_1,
        }
    }
}

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL for API requests.
    pub base_url: String,
    /// Token endpoint path, relative to `base_url`.
    pub token_path: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Read timeout.
    pub read_timeout: Duration,
    /// Custom user agent.
    pub user_agent: Option<String>,
    /// Create registrant call version.
    pub registrant_fields: RegistrantFields,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token_path: DEFAULT_TOKEN_PATH.to_owned(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
            user_agent: None,
            registrant_fields: RegistrantFields::default(),
        }
    }
}

impl HttpConfig {
    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(concat!("rgtw/", env!("CARGO_PKG_VERSION")))
    }

    /// Parse the base URL, making sure relative joins keep its path.
    pub fn base(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base)
    }

    /// Resolve a relative API path to a full URL.
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Url::parse(path).map_err(Error::Url);
        }

        self.base()?
            .join(path.trim_start_matches('/'))
            .map_err(Error::Url)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(media_types::JSON));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(media_types::JSON));

    Client::builder()
        .default_headers(headers)
        .user_agent(config.user_agent())
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout)
        .gzip(true)
        .build()
        .map_err(Error::Transport)
}

/// Query, body and header options for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) json: Option<Value>,
    pub(crate) form: Option<Vec<(String, String)>>,
    pub(crate) accept: Option<&'static str>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_owned(), value.to_string()));
        self
    }

    /// Set the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Set a form-encoded body. Takes precedence over `json`.
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.form = Some(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        );
        self
    }

    /// Override the `Accept` header.
    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.accept = Some(media_type);
        self
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        self.json.as_ref()
    }
}

/// Response with its status line recorded and body read.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub outcome: CallOutcome,
    pub text: String,
}

impl RawResponse {
    /// Map the response onto the reply sentinel contract.
    pub fn into_reply(self) -> Result<Reply> {
        if self.outcome.is_error() {
            return Ok(Reply::Failure(self.outcome));
        }

        let body = if self.text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&self.text)?
        };

        Ok(Reply::Success {
            outcome: self.outcome,
            body,
        })
    }
}

/// HTTP request executor.
pub(crate) struct HttpExecutor<'a> {
    client: &'a Client,
    config: &'a HttpConfig,
    last: &'a LastOutcome,
}

impl<'a> HttpExecutor<'a> {
    /// Create a new executor.
    pub fn new(client: &'a Client, config: &'a HttpConfig, last: &'a LastOutcome) -> Self {
        Self {
            client,
            config,
            last,
        }
    }

    pub fn config(&self) -> &HttpConfig {
        self.config
    }

    /// Send one request and record its status line.
    ///
    /// `token` is sent verbatim as the `Authorization` header.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<RawResponse> {
        let url = self.config.resolve_url(path)?;

        let mut request = self.client.request(method.into(), url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, token);
        }
        if let Some(accept) = options.accept {
            request = request.header(ACCEPT, accept);
        }
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(form) = &options.form {
            request = request.form(form);
        } else if let Some(body) = &options.json {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.last.clear();
                log::warn!("{} {} failed without response: {}", method, path, e);
                return Err(Error::Transport(e));
            }
        };

        let outcome = CallOutcome::from_response(&response);
        log::debug!("{} {} -> {}", method, path, outcome);

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                self.last.clear();
                log::warn!("{} {} body read failed: {}", method, path, e);
                return Err(Error::Transport(e));
            }
        };
        self.last.set(outcome.clone());

        Ok(RawResponse { outcome, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_resolve_url() {
        let config = HttpConfig::default();

        let url = config.resolve_url("organizers/42/webinars").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.getgo.com/G2W/rest/organizers/42/webinars"
        );

        let url = config.resolve_url("/oauth/access_token").unwrap();
        assert_eq!(url.as_str(), "https://api.getgo.com/G2W/rest/oauth/access_token");
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let config = HttpConfig {
            base_url: "http://localhost:8080/G2W/rest".into(),
            ..Default::default()
        };

        let url = config.resolve_url("accounts/7/webinars").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/G2W/rest/accounts/7/webinars");
    }

    #[test]
    fn test_request_options() {
        let options = RequestOptions::new()
            .query("sendCancellationEmails", false)
            .json(json!({ "subject": "T" }));

        assert_eq!(
            options.query_pairs(),
            &[("sendCancellationEmails".to_owned(), "false".to_owned())]
        );
        assert_eq!(options.json_body(), Some(&json!({ "subject": "T" })));
    }

    #[test]
    fn test_raw_response_into_reply() {
        let empty = RawResponse {
            outcome: CallOutcome::new(204, "No Content"),
            text: String::new(),
        };
        assert_eq!(
            empty.into_reply().unwrap(),
            Reply::Success {
                outcome: CallOutcome::new(204, "No Content"),
                body: Value::Null,
            }
        );

        let failed = RawResponse {
            outcome: CallOutcome::new(404, "Not Found"),
            text: r#"{"description":"Not found"}"#.into(),
        };
        assert!(failed.into_reply().unwrap().is_failure());

        let garbage = RawResponse {
            outcome: CallOutcome::new(200, "OK"),
            text: "<html>".into(),
        };
        assert!(matches!(garbage.into_reply(), Err(Error::Json(_))));
    }

    #[test]
    fn test_registrant_fields_accept() {
        assert_eq!(RegistrantFields::Basic.accept(), "application/json");
        assert_eq!(
            RegistrantFields::Extended.accept(),
            "application/vnd.citrix.g2wapi-v1.1+json"
        );
    }
}
