//! Cloud account sign-in command.
//!
//! Establishes a session with the configured sync backend and caches the
//! token, so later `sync` runs need no interaction.

use crate::api::{cloud::Cloud, Session};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(cloud_config) = config.cloud else {
        msg_bail_anyhow!(Message::CloudConfigNotFound);
    };

    let mut client = Cloud::new(&cloud_config);
    client.get_session_id().await?;

    msg_success!(Message::LoggedIn);
    Ok(())
}
