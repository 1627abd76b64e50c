//! Auto-update loop.
//!
//! Checks the feed once at start and then on a fixed interval. A downloaded
//! release triggers the restart prompt. Every failure is logged and counted,
//! never propagated: the wallet stays usable without updates.

use std::sync::Arc;

use nano_telemetry::{log_event, metric_inc, UPDATE_CHECKS};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::container::UpdaterConfig;
use crate::domain::{feed_url, Platform, UpdateChoice, UpdateOutcome, UPDATE_READY_MESSAGE};
use crate::ports::{UpdateDialog, UpdateTransport};

pub struct Updater<T, D>
where
    T: UpdateTransport,
    D: UpdateDialog,
{
    config: UpdaterConfig,
    platform: Platform,
    transport: Arc<T>,
    dialog: Arc<D>,
}

impl<T, D> Updater<T, D>
where
    T: UpdateTransport,
    D: UpdateDialog,
{
    pub fn new(config: UpdaterConfig, platform: Platform, transport: Arc<T>, dialog: Arc<D>) -> Self {
        Self {
            config,
            platform,
            transport,
            dialog,
        }
    }

    pub fn feed_url(&self) -> String {
        feed_url(
            &self.config.feed_base,
            &self.config.current_version,
            self.platform.as_str(),
        )
    }

    /// Run one check, download and prompt cycle.
    pub async fn check_once(&self) -> UpdateOutcome {
        let outcome = self.cycle().await;
        metric_inc!(UPDATE_CHECKS, &[outcome.as_str()]);
        debug!(outcome = outcome.as_str(), "Update check finished");
        outcome
    }

    async fn cycle(&self) -> UpdateOutcome {
        let feed = self.feed_url();
        let update = match self.transport.check(&feed).await {
            Ok(Some(update)) => update,
            Ok(None) => return UpdateOutcome::UpToDate,
            Err(e) => {
                log_event!(error, "updater", "There was a problem updating the application", feed = %feed, error = %e);
                return UpdateOutcome::Failed;
            }
        };

        if let Err(e) = self.transport.download(&update).await {
            log_event!(error, "updater", "There was a problem updating the application", release = %update.name, error = %e);
            return UpdateOutcome::Failed;
        }

        info!(release = %update.name, message = UPDATE_READY_MESSAGE, "Update downloaded");
        match self.dialog.prompt(&update).await {
            UpdateChoice::Later => UpdateOutcome::Deferred,
            UpdateChoice::Restart => match self.transport.quit_and_install() {
                Ok(()) => UpdateOutcome::Installing,
                Err(e) => {
                    log_event!(error, "updater", "Could not install the update", release = %update.name, error = %e);
                    UpdateOutcome::Failed
                }
            },
        }
    }

    /// Check now and then every `interval` until shutdown or until an
    /// update is being installed.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        if !self.config.enabled {
            info!("Auto-update disabled");
            return;
        }

        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(feed = %self.feed_url(), every = ?self.config.interval, "Auto-update started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.check_once().await == UpdateOutcome::Installing {
                        break;
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Updater stopping");
                        break;
                    }
                }
            }
        }
    }
}
