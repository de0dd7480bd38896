//! Configuration management for the GoToWebinar CLI.

use anyhow::{Context, Result};
use clap::Args;
use rgtw::{AuthState, GTWClient, RegistrantFields};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration, stored as `rgtw.toml` next to the executable.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// API root override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Use the create registrant call that accepts every form field.
    #[serde(default)]
    pub extended_registrant_fields: bool,
    /// Password-grant credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsConfig>,
    /// Cached authentication state, rewritten after every command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthState>,
}

/// Credentials configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
    pub consumer_key: String,
}

/// Credential overrides taken from flags or the environment.
#[derive(Debug, Clone, Default, Args)]
pub struct CredentialArgs {
    /// Organizer login
    #[arg(long, global = true, env = "GTW_USERNAME")]
    pub username: Option<String>,

    /// Organizer password
    #[arg(long, global = true, env = "GTW_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Developer application consumer key
    #[arg(long, global = true, env = "GTW_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,
}

impl CredentialArgs {
    /// Overlay the flags on the stored credentials.
    pub fn merge(&self, stored: Option<&CredentialsConfig>) -> CredentialsConfig {
        let stored = stored.cloned().unwrap_or_default();
        CredentialsConfig {
            username: self.username.clone().unwrap_or(stored.username),
            password: self.password.clone().unwrap_or(stored.password),
            consumer_key: self.consumer_key.clone().unwrap_or(stored.consumer_key),
        }
    }
}

/// Get the configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join("rgtw.toml"))
}

/// Load configuration from file.
pub fn load_config() -> Result<Config> {
    load_from(&config_path()?)
}

/// Save configuration to file.
pub fn save_config(config: &Config) -> Result<()> {
    save_to(&config_path()?, config)
}

fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).context("Failed to read config file")?;

    toml::from_str(&content).context("Failed to parse config file")
}

fn save_to(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, content).context("Failed to write config file")?;

    Ok(())
}

/// Build a client from the stored configuration and credential overrides.
pub fn build_client(args: &CredentialArgs) -> Result<GTWClient> {
    let config = load_config()?;
    let credentials = args.merge(config.credentials.as_ref());

    let mut builder = GTWClient::builder().credentials(
        credentials.username,
        credentials.password,
        credentials.consumer_key,
    );

    if let Some(auth) = config.auth {
        builder = builder.auth(auth);
    }
    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }
    if config.extended_registrant_fields {
        builder = builder.registrant_fields(RegistrantFields::Extended);
    }

    builder
        .build()
        .context("Failed to build GoToWebinar client. Run 'rgtw auth login' first.")
}

/// Write the client's authentication state back if it changed.
pub fn store_auth(client: &GTWClient) -> Result<()> {
    let mut config = load_config()?;
    let auth = client.auth();

    if config.auth.as_ref() == Some(&auth) || auth == AuthState::default() {
        return Ok(());
    }

    tracing::debug!("storing refreshed authentication state");
    config.auth = Some(auth);
    save_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            base_url = "https://example.test/G2W/rest/"

            [credentials]
            username = "organizer@example.com"
            password = "secret"
            consumer_key = "key"

            [auth]
            accessToken = "tok"
            expiresIn = 1700000000
            organizerKey = "100"
            accountKey = "200"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.base_url.as_deref(),
            Some("https://example.test/G2W/rest/")
        );
        let auth = config.auth.unwrap();
        assert_eq!(auth.access_token, "tok");
        assert_eq!(auth.expires_in, 1_700_000_000);
        assert_eq!(auth.refresh_token, "");
        assert_eq!(auth.organizer_key, "100");
        assert!(!config.extended_registrant_fields);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = env::temp_dir().join("rgtw-cli-test-missing.toml");
        let _ = fs::remove_file(&path);

        let config = load_from(&path).unwrap();
        assert!(config.credentials.is_none());
        assert!(config.auth.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = env::temp_dir().join(format!("rgtw-cli-test-{}.toml", std::process::id()));
        let config = Config {
            base_url: None,
            extended_registrant_fields: true,
            credentials: Some(CredentialsConfig {
                username: "u".into(),
                password: "p".into(),
                consumer_key: "k".into(),
            }),
            auth: Some(AuthState {
                access_token: "tok".into(),
                expires_in: 42,
                ..Default::default()
            }),
        };

        save_to(&path, &config).unwrap();
        let loaded = load_from(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!(loaded.extended_registrant_fields);
        assert_eq!(loaded.credentials.unwrap().username, "u");
        assert_eq!(loaded.auth, config.auth);
    }

    #[test]
    fn test_flags_override_stored_credentials() {
        let stored = CredentialsConfig {
            username: "stored".into(),
            password: "stored-pw".into(),
            consumer_key: "stored-key".into(),
        };
        let args = CredentialArgs {
            username: Some("flag".into()),
            ..Default::default()
        };

        let merged = args.merge(Some(&stored));
        assert_eq!(merged.username, "flag");
        assert_eq!(merged.password, "stored-pw");
        assert_eq!(merged.consumer_key, "stored-key");
    }
}
