//! API client modules for the hosted sync backend.
//!
//! Implements the session management pattern shared by authenticated
//! clients: encrypted credential caching, token persistence, and bounded
//! retry on authentication failure. The only client today is the cloud
//! snapshot API in [`cloud`].
//!
//! ## Session lifecycle
//!
//! 1. **Cache check**: a previously stored session token is reused as-is
//! 2. **Authentication loop**: otherwise credentials are prompted (or read
//!    from the encrypted cache) and exchanged for a token
//! 3. **Retry logic**: wrong credentials re-prompt up to a fixed limit
//! 4. **Persistence**: successful tokens are written for future runs
//!
//! Signed-in state is simply "a cached token exists"; signing out deletes
//! the cache.

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_error_anyhow;
use anyhow::Result;
use std::fs;
use std::io::Write;

pub mod cloud;

pub use cloud::CloudConfig;

/// Maximum number of authentication retry attempts before giving up.
const MAX_RETRY_COUNT: i32 = 3;

/// Common session management trait for authenticated API clients.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Performs authentication and returns a session token.
    async fn login(&self) -> Result<String>;

    /// Sets user credentials for the next authentication attempt.
    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// Returns the filename used for session storage.
    fn session_id_file(&self) -> &str;

    /// Returns the secret manager for this API client.
    fn secret(&self) -> Secret;

    /// Returns current retry attempt count.
    fn retry(&self) -> i32;

    /// Increments the retry counter.
    fn inc_retry(&mut self);

    /// Whether a cached session token exists for this client.
    fn is_signed_in(&self) -> Result<bool> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        Ok(session_id_file_path.exists())
    }

    /// Retrieves or establishes a valid session token.
    ///
    /// Restores the cached token when present; otherwise prompts for
    /// credentials, authenticates, and caches the result. Wrong credentials
    /// re-prompt up to the retry limit.
    async fn get_session_id(&mut self) -> Result<String> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        let session_id_file_path_str = session_id_file_path.to_string_lossy().to_string();

        if let Ok(session_id) = Self::read_session_id(&session_id_file_path_str) {
            return Ok(session_id);
        }

        loop {
            // Force a fresh prompt on retries, use the cache on the first try
            let password: String = match self.retry() > 0 {
                true => self.secret().prompt()?,
                false => self.secret().get_or_prompt()?,
            };

            self.set_credentials(&password)?;

            match self.login().await {
                Ok(session_id) => {
                    let _ = Self::write_session_id(&session_id_file_path_str, &session_id);
                    return Ok(session_id);
                }
                Err(_) => {
                    if self.retry() < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    /// Reads a session token from the specified file.
    fn read_session_id(file_name: &str) -> Result<String> {
        Ok(fs::read_to_string(file_name)?)
    }

    /// Writes a session token to the specified file.
    fn write_session_id(file_name: &str, session_id: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(file_name)?;
        file.write_all(session_id.as_bytes())?;
        Ok(())
    }

    /// Deletes the cached session token, forcing fresh authentication on
    /// the next request. This is the "sign out" operation.
    fn delete_session_id(&self) -> Result<()> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        if session_id_file_path.exists() {
            fs::remove_file(session_id_file_path)?;
        }
        Ok(())
    }
}
