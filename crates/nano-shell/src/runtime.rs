//! Shell runtime: the single owner of the event router.
//!
//! Host callbacks (window lifecycle, activation, focus changes, proxy
//! challenges) arrive as [`HostSignal`]s on one channel and are handled in
//! order, so the router needs no locking.

use std::sync::Arc;

use ln_01_event_router::{Dispatch, EventKind, EventRouter, EventRouterApi, FlushReport, RenderSurface};
use nano_telemetry::{log_event, metric_inc, DEEP_LINKS_RECEIVED, PROXY_LOGINS, ROUTED_EVENTS};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::container::ShellConfig;
use crate::domain::{
    forwarded_argv, AboutPanel, ContextMenu, ContextTarget, DeepLink, ProxyAuthInfo,
    ProxyCredentials, ProxyLoginSlot, ShellError, WindowOptions,
};
use crate::ports::{HostApp, HostWindow};

/// Callbacks from the native host.
#[derive(Debug)]
pub enum HostSignal {
    /// The application finished launching.
    Ready,
    /// The UI in the main window finished loading.
    DidFinishLoad,
    /// The main window was closed.
    WindowClosed,
    AllWindowsClosed,
    /// The dock icon was clicked (macOS).
    Activate,
    /// Another instance was started; it hands over its argv and exits.
    SecondInstance { argv: Vec<String> },
    /// The OS opened a URL with our scheme (macOS).
    OpenUrl(String),
    Blur,
    Focus,
    ContextMenu(ContextTarget),
    /// A proxy asked for credentials. `reply` receives them.
    ProxyLogin {
        auth_info: ProxyAuthInfo,
        reply: oneshot::Sender<ProxyCredentials>,
    },
    /// The UI answered the pending proxy challenge.
    ProxyCredentialsEntered(ProxyCredentials),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct ShellRuntime<H>
where
    H: HostApp + HostWindow,
{
    config: ShellConfig,
    host: Arc<H>,
    router: EventRouter,
    /// Surface of the open main window, if any.
    surface: Option<Arc<dyn RenderSurface>>,
    /// Arguments this process was launched with.
    launch_argv: Vec<String>,
    proxy: ProxyLoginSlot,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl<H> ShellRuntime<H>
where
    H: HostApp + HostWindow,
{
    pub fn new(config: ShellConfig, host: Arc<H>, launch_argv: Vec<String>) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            config,
            host,
            router: EventRouter::new(),
            surface: None,
            launch_argv,
            proxy: ProxyLoginSlot::new(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    pub fn has_window(&self) -> bool {
        self.surface.is_some()
    }

    /// Receiver that flips to `true` when the shell stops.
    pub fn subscribe_shutdown(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Handle signals until the host quits.
    pub async fn run(mut self, mut signals: mpsc::Receiver<HostSignal>) -> Result<(), ShellError> {
        info!(
            platform = %self.config.platform,
            protocol = %self.config.protocol,
            "Shell runtime started"
        );

        let result = loop {
            match signals.recv().await {
                Some(signal) => {
                    if self.handle(signal) == LoopControl::Quit {
                        break Ok(());
                    }
                }
                None => break Err(ShellError::SignalChannelClosed),
            }
        };

        self.shutdown();
        result
    }

    /// Handle one host signal.
    pub fn handle(&mut self, signal: HostSignal) -> LoopControl {
        debug!(?signal, "Host signal");
        match signal {
            HostSignal::Ready => self.on_ready(),
            HostSignal::DidFinishLoad => self.on_finish_load(),
            HostSignal::WindowClosed => {
                self.surface = None;
                self.router.detach();
            }
            HostSignal::AllWindowsClosed => {
                if self.config.platform.quits_when_all_windows_closed() {
                    return self.quit();
                }
                debug!("Last window closed, staying alive");
            }
            HostSignal::Activate => {
                if self.surface.is_none() {
                    self.create_window();
                }
            }
            HostSignal::SecondInstance { argv } => self.on_second_instance(&argv),
            HostSignal::OpenUrl(url) => self.on_open_url(&url),
            HostSignal::Blur => {
                self.route(EventKind::Blur, Value::Null);
            }
            HostSignal::Focus => {
                self.route(EventKind::Focus, Value::Null);
            }
            HostSignal::ContextMenu(target) => {
                if self.surface.is_some() {
                    if let Some(menu) = ContextMenu::for_target(&target) {
                        self.host.popup_menu(menu);
                    }
                }
            }
            HostSignal::ProxyLogin { auth_info, reply } => {
                self.proxy.park(reply);
                metric_inc!(PROXY_LOGINS);
                log_event!(info, "shell", "Proxy login requested", host = %auth_info.host, realm = %auth_info.realm);
                let payload = serde_json::to_value(&auth_info).unwrap_or_default();
                self.route(EventKind::ProxyLogin, payload);
            }
            HostSignal::ProxyCredentialsEntered(credentials) => {
                self.proxy.resolve(credentials);
            }
            HostSignal::Quit => return self.quit(),
        }
        LoopControl::Continue
    }

    fn on_ready(&mut self) {
        self.host.register_protocol(&self.config.protocol);
        if self.config.platform.has_about_panel() {
            self.host.set_about_panel(&AboutPanel::current());
        }
        self.create_window();
    }

    fn create_window(&mut self) {
        let options = WindowOptions::for_work_area(self.host.work_area(), &self.config.window.ui_url);
        info!(width = options.width, height = options.height, "Creating main window");
        self.surface = Some(self.host.create_window(&options));

        if self.config.platform.delivers_links_in_argv() {
            let argv = self.launch_argv.clone();
            self.forward_argv(&argv, "argv");
        }
    }

    fn on_finish_load(&mut self) {
        let Some(surface) = self.surface.clone() else {
            warn!("UI finished loading without a window, ignoring");
            return;
        };

        if self.router.is_ready() {
            match self.router.attach(surface) {
                Ok(report) => record_flush(&report),
                Err(e) => warn!(error = %e, "Could not attach render surface"),
            }
        } else if let Some(report) = self.router.mark_ready(surface) {
            record_flush(&report);
        }
    }

    fn on_second_instance(&mut self, argv: &[String]) {
        if self.config.platform.delivers_links_in_argv() {
            self.forward_argv(argv, "second_instance");
        }
        if self.surface.is_some() {
            if self.host.is_minimized() {
                self.host.restore();
            }
            self.host.focus();
        }
    }

    fn on_open_url(&mut self, url: &str) {
        match DeepLink::parse(url, &self.config.protocol) {
            Ok(link) => {
                metric_inc!(DEEP_LINKS_RECEIVED, &["open_url"]);
                log_event!(info, "shell", "Deep link received", url = %link);
                self.route(EventKind::OpenUrl, Value::String(link.into_string()));
            }
            Err(e) => log_event!(warn, "shell", "Ignoring URL", error = %e),
        }
    }

    fn forward_argv(&mut self, argv: &[String], source: &str) {
        let args = forwarded_argv(argv);
        metric_inc!(DEEP_LINKS_RECEIVED, &[source]);
        log_event!(info, "shell", "Forwarding process arguments", source, count = args.len());
        let payload = Value::Array(args.into_iter().map(Value::String).collect());
        self.route(EventKind::OpenUrl, payload);
    }

    fn route(&mut self, kind: EventKind, payload: Value) -> Dispatch {
        let dispatch = self.router.notify(kind.clone(), payload);
        let outcome = match dispatch {
            Dispatch::Delivered => "delivered",
            Dispatch::Queued => "queued",
            Dispatch::Failed => "dropped",
        };
        metric_inc!(ROUTED_EVENTS, &[kind.as_str(), outcome]);
        dispatch
    }

    fn quit(&mut self) -> LoopControl {
        info!("Quitting");
        self.host.quit();
        LoopControl::Quit
    }

    fn shutdown(&self) {
        if self.shutdown_tx.send(true).is_err() {
            debug!("No shutdown subscribers left");
        }
    }
}

fn record_flush(report: &FlushReport) {
    ROUTED_EVENTS
        .with_label_values(&["backlog", "delivered"])
        .inc_by(report.delivered as f64);
    ROUTED_EVENTS
        .with_label_values(&["backlog", "dropped"])
        .inc_by(report.failed as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HeadlessHost;
    use crate::domain::{Platform, WorkArea};
    use ln_01_event_router::{DeferredEvent, ReadinessState, SurfaceReceiver};
    use serde_json::json;

    type Windows = mpsc::UnboundedReceiver<SurfaceReceiver>;

    fn runtime(platform: Platform) -> (ShellRuntime<HeadlessHost>, Arc<HeadlessHost>, Windows) {
        let (host, windows) = HeadlessHost::new(WorkArea {
            width: 1920,
            height: 1080,
        });
        let host = Arc::new(host);
        let config = ShellConfig {
            platform,
            ..ShellConfig::default()
        };
        let argv = vec!["lisk-nano.exe".to_string(), "lisk://main/voting".to_string()];
        (ShellRuntime::new(config, Arc::clone(&host), argv), host, windows)
    }

    fn drain(ui: &mut SurfaceReceiver) -> Vec<DeferredEvent> {
        std::iter::from_fn(|| ui.try_recv()).collect()
    }

    #[test]
    fn test_ready_registers_protocol_and_sizes_window() {
        let (mut shell, host, mut windows) = runtime(Platform::Linux);
        shell.handle(HostSignal::Ready);

        assert_eq!(host.protocols(), vec!["lisk"]);
        let created = host.windows();
        assert_eq!(created.len(), 1);
        assert_eq!((created[0].width, created[0].height), (1670, 756));
        assert!(windows.try_recv().is_ok());
        assert!(shell.has_window());
        assert!(host.about().is_none());
    }

    #[test]
    fn test_about_panel_only_on_macos() {
        let (mut shell, host, _windows) = runtime(Platform::MacOs);
        shell.handle(HostSignal::Ready);

        let about = host.about().unwrap();
        assert_eq!(about.application_name, "Lisk Nano");
        assert!(about.copyright.starts_with("Copyright © 2016 - "));
    }

    #[test]
    fn test_windows_argv_is_held_until_ui_loads() {
        let (mut shell, _host, mut windows) = runtime(Platform::Windows);
        shell.handle(HostSignal::Ready);
        let mut ui = windows.try_recv().unwrap();

        assert!(ui.try_recv().is_none());
        assert_eq!(shell.router().pending(), 1);

        shell.handle(HostSignal::DidFinishLoad);
        let events = drain(&mut ui);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), &EventKind::OpenUrl);
        assert_eq!(events[0].payload(), &json!(["lisk://main/voting"]));
    }

    #[test]
    fn test_linux_does_not_forward_argv() {
        let (mut shell, _host, _windows) = runtime(Platform::Linux);
        shell.handle(HostSignal::Ready);
        assert_eq!(shell.router().pending(), 0);
    }

    #[test]
    fn test_events_before_load_flush_in_order() {
        let (mut shell, _host, mut windows) = runtime(Platform::MacOs);
        shell.handle(HostSignal::OpenUrl("lisk://first".into()));
        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::Blur);
        shell.handle(HostSignal::OpenUrl("lisk://second".into()));
        let mut ui = windows.try_recv().unwrap();

        shell.handle(HostSignal::DidFinishLoad);
        shell.handle(HostSignal::Focus);

        let kinds: Vec<_> = drain(&mut ui).iter().map(|e| e.kind().clone()).collect();
        assert_eq!(
            kinds,
            vec![EventKind::OpenUrl, EventKind::Blur, EventKind::OpenUrl, EventKind::Focus]
        );
        assert_eq!(shell.router().state(), ReadinessState::Ready);
    }

    #[test]
    fn test_foreign_scheme_is_dropped() {
        let (mut shell, _host, _windows) = runtime(Platform::MacOs);
        shell.handle(HostSignal::OpenUrl("https://evil.example".into()));
        assert_eq!(shell.router().pending(), 0);
    }

    #[test]
    fn test_second_instance_restores_and_focuses() {
        let (mut shell, host, mut windows) = runtime(Platform::Windows);
        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::DidFinishLoad);
        let mut ui = windows.try_recv().unwrap();
        drain(&mut ui);

        host.set_minimized(true);
        shell.handle(HostSignal::SecondInstance {
            argv: vec!["lisk-nano.exe".into(), "lisk://send".into()],
        });

        assert_eq!(host.restores(), 1);
        assert_eq!(host.focuses(), 1);
        let events = drain(&mut ui);
        assert_eq!(events[0].payload(), &json!(["lisk://send"]));

        shell.handle(HostSignal::SecondInstance { argv: vec![] });
        assert_eq!(host.restores(), 1);
        assert_eq!(host.focuses(), 2);
    }

    #[test]
    fn test_reopened_window_receives_backlog() {
        let (mut shell, _host, mut windows) = runtime(Platform::MacOs);
        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::DidFinishLoad);
        let mut first = windows.try_recv().unwrap();

        shell.handle(HostSignal::WindowClosed);
        assert!(!shell.has_window());
        assert_eq!(
            shell.handle(HostSignal::AllWindowsClosed),
            LoopControl::Continue
        );
        shell.handle(HostSignal::OpenUrl("lisk://while-closed".into()));
        assert_eq!(shell.router().state(), ReadinessState::Detached);

        shell.handle(HostSignal::Activate);
        let mut second = windows.try_recv().unwrap();
        assert!(second.try_recv().is_none());

        shell.handle(HostSignal::DidFinishLoad);
        let events = drain(&mut second);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload(), &json!("lisk://while-closed"));
        assert!(drain(&mut first).is_empty());
    }

    #[test]
    fn test_activate_with_open_window_is_noop() {
        let (mut shell, host, _windows) = runtime(Platform::MacOs);
        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::Activate);
        assert_eq!(host.windows().len(), 1);
    }

    #[test]
    fn test_last_window_quits_except_on_macos() {
        let (mut shell, host, _windows) = runtime(Platform::Linux);
        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::WindowClosed);
        assert_eq!(shell.handle(HostSignal::AllWindowsClosed), LoopControl::Quit);
        assert!(host.has_quit());
    }

    #[test]
    fn test_context_menus() {
        let (mut shell, host, _windows) = runtime(Platform::Linux);
        let editable = ContextTarget {
            is_editable: true,
            selection_text: String::new(),
        };
        shell.handle(HostSignal::ContextMenu(editable.clone()));
        assert!(host.menus().is_empty());

        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::ContextMenu(editable));
        shell.handle(HostSignal::ContextMenu(ContextTarget {
            is_editable: false,
            selection_text: "16313739661670634666L".into(),
        }));
        shell.handle(HostSignal::ContextMenu(ContextTarget::default()));

        assert_eq!(host.menus(), vec![ContextMenu::Input, ContextMenu::Selection]);
    }

    #[test]
    fn test_proxy_login_round_trip() {
        let (mut shell, _host, mut windows) = runtime(Platform::Linux);
        shell.handle(HostSignal::Ready);
        shell.handle(HostSignal::DidFinishLoad);
        let mut ui = windows.try_recv().unwrap();

        let (reply, mut answer) = oneshot::channel();
        shell.handle(HostSignal::ProxyLogin {
            auth_info: ProxyAuthInfo {
                is_proxy: true,
                scheme: "basic".into(),
                host: "proxy.local".into(),
                port: 3128,
                realm: "corp".into(),
            },
            reply,
        });

        let events = drain(&mut ui);
        assert_eq!(events[0].kind(), &EventKind::ProxyLogin);
        assert_eq!(events[0].payload()["host"], json!("proxy.local"));
        assert_eq!(events[0].payload()["isProxy"], json!(true));

        shell.handle(HostSignal::ProxyCredentialsEntered(ProxyCredentials::new(
            "alice", "secret",
        )));
        assert_eq!(answer.try_recv().unwrap().username, "alice");

        // A second answer has nobody to go to.
        shell.handle(HostSignal::ProxyCredentialsEntered(ProxyCredentials::new(
            "alice", "again",
        )));
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let (shell, host, _windows) = runtime(Platform::Linux);
        let shutdown = shell.subscribe_shutdown();
        let (tx, rx) = mpsc::channel(8);

        tx.send(HostSignal::Ready).await.unwrap();
        tx.send(HostSignal::Quit).await.unwrap();
        shell.run(rx).await.unwrap();

        assert!(host.has_quit());
        assert!(*shutdown.borrow());
    }

    #[tokio::test]
    async fn test_closed_signal_channel_is_an_error() {
        let (shell, _host, _windows) = runtime(Platform::Linux);
        let (tx, rx) = mpsc::channel(1);
        drop(tx);
        assert_eq!(shell.run(rx).await, Err(ShellError::SignalChannelClosed));
    }
}
