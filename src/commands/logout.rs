//! Cloud account sign-out command.
//!
//! Deletes the cached session token and the encrypted credential cache.
//! Purely local; the remote session is simply never used again.

use crate::api::cloud::Cloud;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let Some(cloud_config) = config.cloud else {
        msg_bail_anyhow!(Message::CloudConfigNotFound);
    };

    let client = Cloud::new(&cloud_config);
    client.sign_out()?;

    msg_success!(Message::LoggedOut);
    Ok(())
}
