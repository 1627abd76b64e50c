//! HTTP update feed client.
//!
//! The feed answers `204 No Content` when the caller is up to date and a JSON
//! [`UpdateInfo`] otherwise. Releases are staged under a local directory.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc;
use tracing::info;

use crate::domain::{ShellError, UpdateInfo};
use crate::ports::UpdateTransport;
use crate::runtime::HostSignal;

pub struct HttpUpdateTransport {
    client: Client,
    staging_dir: PathBuf,
    staged: Mutex<Option<PathBuf>>,
    /// Where to ask the shell to quit once an install is requested.
    signals: mpsc::Sender<HostSignal>,
}

impl HttpUpdateTransport {
    pub fn new(staging_dir: PathBuf, signals: mpsc::Sender<HostSignal>) -> Result<Self, ShellError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ShellError::Update(e.to_string()))?;

        Ok(Self {
            client,
            staging_dir,
            staged: Mutex::new(None),
            signals,
        })
    }

    pub fn staged(&self) -> Option<PathBuf> {
        self.staged.lock().clone()
    }
}

/// File name for a release download: the last URL path segment.
pub fn staged_file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("lisk-nano-update")
        .to_string()
}

#[async_trait]
impl UpdateTransport for HttpUpdateTransport {
    async fn check(&self, feed_url: &str) -> Result<Option<UpdateInfo>, String> {
        let response = self
            .client
            .get(feed_url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(None),
            status if status.is_success() => response
                .json::<UpdateInfo>()
                .await
                .map(Some)
                .map_err(|e| format!("malformed feed response: {e}")),
            status => Err(format!("feed returned {status}")),
        }
    }

    async fn download(&self, update: &UpdateInfo) -> Result<(), String> {
        let response = self
            .client
            .get(&update.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?;
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;

        tokio::fs::create_dir_all(&self.staging_dir)
            .await
            .map_err(|e| e.to_string())?;
        let path = self.staging_dir.join(staged_file_name(&update.url));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| e.to_string())?;

        info!(path = %path.display(), size = bytes.len(), "Update staged");
        *self.staged.lock() = Some(path);
        Ok(())
    }

    fn quit_and_install(&self) -> Result<(), String> {
        let staged = self
            .staged()
            .ok_or_else(|| "no update has been staged".to_string())?;
        info!(path = %staged.display(), "Quitting to install update");
        self.signals
            .try_send(HostSignal::Quit)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_file_name() {
        assert_eq!(
            staged_file_name("https://dl.example/releases/lisk-nano-1.1.0.zip?sig=abc"),
            "lisk-nano-1.1.0.zip"
        );
        assert_eq!(staged_file_name("https://dl.example/"), "lisk-nano-update");
    }

    #[tokio::test]
    async fn test_install_needs_a_staged_release() {
        let (tx, mut rx) = mpsc::channel(1);
        let transport = HttpUpdateTransport::new(std::env::temp_dir(), tx).unwrap();

        assert!(transport.quit_and_install().is_err());
        assert!(rx.try_recv().is_err());

        *transport.staged.lock() = Some(std::env::temp_dir().join("lisk-nano-1.1.0.zip"));
        assert!(transport.quit_and_install().is_ok());
        assert!(matches!(rx.try_recv(), Ok(HostSignal::Quit)));
    }
}
