//! # Deep Link Flow
//!
//! A URL opened by the OS travels through the shell's signal loop into the
//! deferred event router and reaches the UI exactly once, in order, no
//! matter whether the UI had finished loading.
//!
//! ```text
//! OS ──HostSignal──→ ShellRuntime ──notify──→ EventRouter ──deliver──→ ChannelSurface ──→ UI
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ln_01_event_router::{DeferredEvent, EventKind, SurfaceReceiver};
    use nano_shell::adapters::HeadlessHost;
    use nano_shell::domain::{Platform, WorkArea};
    use nano_shell::{HostSignal, ShellConfig, ShellRuntime};
    use serde_json::json;
    use tokio::sync::mpsc;
    use tokio::time::timeout;
    use tokio_stream::StreamExt;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Harness {
        signals: mpsc::Sender<HostSignal>,
        windows: mpsc::UnboundedReceiver<SurfaceReceiver>,
        host: Arc<HeadlessHost>,
        shell: tokio::task::JoinHandle<Result<(), nano_shell::ShellError>>,
    }

    fn start_shell(platform: Platform, argv: &[&str]) -> Harness {
        let (host, windows) = HeadlessHost::new(WorkArea::default());
        let host = Arc::new(host);
        let config = ShellConfig {
            platform,
            ..ShellConfig::default()
        };
        let argv = argv.iter().map(|a| a.to_string()).collect();
        let runtime = ShellRuntime::new(config, Arc::clone(&host), argv);

        let (signals, rx) = mpsc::channel(16);
        let shell = tokio::spawn(runtime.run(rx));
        Harness {
            signals,
            windows,
            host,
            shell,
        }
    }

    async fn next_window(harness: &mut Harness) -> SurfaceReceiver {
        timeout(Duration::from_secs(1), harness.windows.recv())
            .await
            .expect("window created in time")
            .expect("host still running")
    }

    async fn next_event(ui: &mut SurfaceReceiver) -> DeferredEvent {
        timeout(Duration::from_secs(1), ui.recv())
            .await
            .expect("event delivered in time")
            .expect("surface still open")
    }

    // =============================================================================
    // INTEGRATION TESTS: ACTIVATION → UI
    // =============================================================================

    /// A link opened during startup is held until the UI has loaded.
    #[tokio::test]
    async fn test_link_before_load_arrives_after_load() {
        let mut harness = start_shell(Platform::MacOs, &["lisk-nano"]);

        harness
            .signals
            .send(HostSignal::OpenUrl("lisk://main/transactions".into()))
            .await
            .unwrap();
        harness.signals.send(HostSignal::Ready).await.unwrap();
        let mut ui = next_window(&mut harness).await;

        tokio::task::yield_now().await;
        assert!(ui.try_recv().is_none());

        harness.signals.send(HostSignal::DidFinishLoad).await.unwrap();
        let event = next_event(&mut ui).await;
        assert_eq!(event.kind(), &EventKind::OpenUrl);
        assert_eq!(event.payload(), &json!("lisk://main/transactions"));

        harness.signals.send(HostSignal::Quit).await.unwrap();
        harness.shell.await.unwrap().unwrap();
        assert!(harness.host.has_quit());
    }

    /// On Windows the launch arguments and every second instance's
    /// arguments reach the UI as `openUrl` events.
    #[tokio::test]
    async fn test_windows_argv_and_second_instance() {
        let mut harness = start_shell(Platform::Windows, &["lisk-nano.exe", "lisk://launch"]);
        harness.signals.send(HostSignal::Ready).await.unwrap();
        harness.signals.send(HostSignal::DidFinishLoad).await.unwrap();
        let mut ui = next_window(&mut harness).await;

        assert_eq!(next_event(&mut ui).await.payload(), &json!(["lisk://launch"]));

        harness
            .signals
            .send(HostSignal::SecondInstance {
                argv: vec!["lisk-nano.exe".into(), "lisk://second".into()],
            })
            .await
            .unwrap();
        assert_eq!(next_event(&mut ui).await.payload(), &json!(["lisk://second"]));

        harness.signals.send(HostSignal::Quit).await.unwrap();
        harness.shell.await.unwrap().unwrap();
        assert_eq!(harness.host.focuses(), 1);
    }

    /// Events sent while the window is closed go to the next window.
    #[tokio::test]
    async fn test_events_survive_window_recreation() {
        let mut harness = start_shell(Platform::MacOs, &["lisk-nano"]);
        harness.signals.send(HostSignal::Ready).await.unwrap();
        harness.signals.send(HostSignal::DidFinishLoad).await.unwrap();
        let first = next_window(&mut harness).await;

        for signal in [
            HostSignal::WindowClosed,
            HostSignal::AllWindowsClosed,
            HostSignal::OpenUrl("lisk://one".into()),
            HostSignal::OpenUrl("lisk://two".into()),
            HostSignal::Activate,
            HostSignal::DidFinishLoad,
            HostSignal::Quit,
        ] {
            harness.signals.send(signal).await.unwrap();
        }
        (&mut harness.shell).await.unwrap().unwrap();

        let second = next_window(&mut harness).await;
        let delivered: Vec<_> = second
            .into_stream()
            .map(|event| event.payload().clone())
            .collect()
            .await;
        assert_eq!(delivered, vec![json!("lisk://one"), json!("lisk://two")]);

        let stale: Vec<_> = first.into_stream().collect().await;
        assert!(stale.is_empty());
    }

    /// Focus changes are relayed in order with links.
    #[tokio::test]
    async fn test_focus_relay_order() {
        let mut harness = start_shell(Platform::Linux, &["lisk-nano"]);
        harness.signals.send(HostSignal::Ready).await.unwrap();
        for signal in [
            HostSignal::Blur,
            HostSignal::OpenUrl("lisk://x".into()),
            HostSignal::DidFinishLoad,
            HostSignal::Focus,
        ] {
            harness.signals.send(signal).await.unwrap();
        }
        let mut ui = next_window(&mut harness).await;

        let mut kinds = Vec::new();
        for _ in 0..3 {
            kinds.push(next_event(&mut ui).await.kind().clone());
        }
        assert_eq!(kinds, vec![EventKind::Blur, EventKind::OpenUrl, EventKind::Focus]);

        harness.signals.send(HostSignal::Quit).await.unwrap();
        harness.shell.await.unwrap().unwrap();
    }
}
