//! Proxy authentication relay.
//!
//! When the network stack hits an authenticating proxy, the challenge is
//! shown in the UI and the host waits for the user's credentials. Only one
//! challenge is outstanding at a time.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Details of a proxy authentication challenge, as shown in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyAuthInfo {
    pub is_proxy: bool,
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub realm: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProxyCredentials {
    pub username: String,
    pub password: String,
}

impl ProxyCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for ProxyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parking spot for the reply channel of the outstanding challenge.
#[derive(Debug, Default)]
pub struct ProxyLoginSlot {
    pending: Option<oneshot::Sender<ProxyCredentials>>,
}

impl ProxyLoginSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `reply`. A challenge still waiting is superseded; its requester
    /// sees the channel close.
    pub fn park(&mut self, reply: oneshot::Sender<ProxyCredentials>) {
        if self.pending.replace(reply).is_some() {
            debug!("Earlier proxy challenge superseded");
        }
    }

    /// Hand the credentials to the parked challenge. Returns whether one was
    /// waiting and still listening.
    pub fn resolve(&mut self, credentials: ProxyCredentials) -> bool {
        match self.pending.take() {
            Some(reply) => {
                let delivered = reply.send(credentials).is_ok();
                if !delivered {
                    warn!("Proxy challenge was abandoned before credentials arrived");
                }
                delivered
            }
            None => {
                warn!("Proxy credentials entered with no pending challenge, ignoring");
                false
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
