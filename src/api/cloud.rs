//! Cloud snapshot API client.
//!
//! Talks to the hosted backend that stores a user's boards. Sync is
//! deliberately simple: the whole dataset is pushed and pulled as one JSON
//! snapshot and the storage layer is last-write-wins, with no merging and
//! no per-field conflict resolution.
//!
//! ## Endpoints
//!
//! - `POST {api_url}/auth/login` - exchanges credentials for a session token
//! - `GET {api_url}/boards` - returns the remote snapshot
//! - `PUT {api_url}/boards` - replaces the remote snapshot
//!
//! A `401` invalidates the cached session and retries authentication a
//! bounded number of times.

use super::Session;
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_RETRY_COUNT: i32 = 3;
const SESSION_ID_FILE: &str = ".cloud_session";
const SECRET_FILE: &str = ".cloud_secret";
const LOGIN_URL: &str = "auth/login";
const BOARDS_URL: &str = "boards";

#[derive(Serialize)]
struct LoginCredentials {
    login: String,
    password: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

/// Whole-dataset wire format exchanged with the backend.
///
/// Dates travel as `YYYY-MM-DD` / `YYYY-MM-DD HH:MM:SS` strings; values
/// that fail to parse on import are treated as absent rather than errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub boards: Vec<SnapshotBoard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotBoard {
    pub timeframe: String,
    pub view_date: String,
    pub tasks: Vec<SnapshotTask>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotTask {
    pub text: String,
    pub completed: bool,
    pub position: i64,
    pub created_at: Option<String>,
    pub completed_at: Option<String>,
    pub target_date: Option<String>,
}

/// Cloud API client with cached-session authentication.
pub struct Cloud {
    client: Client,
    config: CloudConfig,
    secret: Secret,
    password: Option<String>,
    retries: i32,
}

impl Cloud {
    pub fn new(config: &CloudConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(SECRET_FILE, &Message::PromptCloudPassword.to_string()),
            password: None,
            retries: 0,
        }
    }

    /// Replaces the remote snapshot with the local one.
    pub async fn push_snapshot(&mut self, snapshot: &Snapshot) -> Result<StatusCode> {
        loop {
            let token = self.get_session_id().await?;
            let url = format!("{}/{}", self.config.api_url, BOARDS_URL);

            let res = self.client.put(url).bearer_auth(token).json(snapshot).send().await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.delete_session_id()?;
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    self.retries += 1;
                    continue;
                }
                status => return Ok(status),
            }
        }
    }

    /// Fetches the remote snapshot for a full local reload.
    pub async fn fetch_snapshot(&mut self) -> Result<Snapshot> {
        loop {
            let token = self.get_session_id().await?;
            let url = format!("{}/{}", self.config.api_url, BOARDS_URL);

            let res = self.client.get(url).bearer_auth(token).send().await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.delete_session_id()?;
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    self.retries += 1;
                    continue;
                }
                _ => return Ok(res.json::<Snapshot>().await?),
            }
        }
    }

    /// Signs out: clears both the session token and the credential cache.
    pub fn sign_out(&self) -> Result<()> {
        self.delete_session_id()?;
        self.secret.forget()?;
        Ok(())
    }
}

impl Session for Cloud {
    async fn login(&self) -> Result<String> {
        let url = format!("{}/{}", self.config.api_url, LOGIN_URL);
        let credentials = LoginCredentials {
            login: self.config.login.clone(),
            password: self.password.clone().unwrap_or_default(),
        };

        let res = self.client.post(url).json(&credentials).send().await?;
        let auth = res.error_for_status()?.json::<AuthResponse>().await?;
        Ok(auth.token)
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.password = Some(password.to_owned());
        Ok(())
    }

    fn session_id_file(&self) -> &str {
        SESSION_ID_FILE
    }

    fn secret(&self) -> Secret {
        self.secret.clone()
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

/// Configuration for the cloud sync backend.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CloudConfig {
    /// Base URL of the sync API, without a trailing slash.
    pub api_url: String,
    /// Account email used for authentication.
    pub login: String,
}

impl CloudConfig {
    /// Returns the configuration module metadata for the cloud backend.
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "cloud".to_string(),
            name: "Cloud sync".to_string(),
        }
    }

    /// Runs an interactive configuration setup for the cloud backend,
    /// pre-filling existing values as defaults.
    pub fn init(config: &Option<CloudConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            login: "".to_string(),
        });

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCloudApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            login: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCloudLogin.to_string())
                .default(config.login)
                .interact_text()?,
        })
    }
}
