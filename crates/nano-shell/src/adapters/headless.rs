//! Headless host.
//!
//! Runs the shell without a native window toolkit: every "window" is a
//! channel-backed render surface whose receiving half is handed out through
//! an mpsc channel. Host calls are recorded for inspection.

use std::sync::Arc;

use ln_01_event_router::{ChannelSurface, RenderSurface, SurfaceReceiver};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::{AboutPanel, ContextMenu, WindowOptions, WorkArea};
use crate::ports::{HostApp, HostWindow};

#[derive(Debug, Default)]
struct HostState {
    protocols: Vec<String>,
    about: Option<AboutPanel>,
    windows: Vec<WindowOptions>,
    minimized: bool,
    restores: usize,
    focuses: usize,
    menus: Vec<ContextMenu>,
    quit: bool,
}

pub struct HeadlessHost {
    work_area: WorkArea,
    state: RwLock<HostState>,
    surfaces: mpsc::UnboundedSender<SurfaceReceiver>,
}

impl HeadlessHost {
    /// The returned receiver yields the UI end of each window created.
    pub fn new(work_area: WorkArea) -> (Self, mpsc::UnboundedReceiver<SurfaceReceiver>) {
        let (surfaces, receivers) = mpsc::unbounded_channel();
        let host = Self {
            work_area,
            state: RwLock::new(HostState::default()),
            surfaces,
        };
        (host, receivers)
    }

    /// Simulate the user minimizing the window.
    pub fn set_minimized(&self, minimized: bool) {
        self.state.write().minimized = minimized;
    }

    pub fn protocols(&self) -> Vec<String> {
        self.state.read().protocols.clone()
    }

    pub fn about(&self) -> Option<AboutPanel> {
        self.state.read().about.clone()
    }

    pub fn windows(&self) -> Vec<WindowOptions> {
        self.state.read().windows.clone()
    }

    pub fn restores(&self) -> usize {
        self.state.read().restores
    }

    pub fn focuses(&self) -> usize {
        self.state.read().focuses
    }

    pub fn menus(&self) -> Vec<ContextMenu> {
        self.state.read().menus.clone()
    }

    pub fn has_quit(&self) -> bool {
        self.state.read().quit
    }
}

impl HostApp for HeadlessHost {
    fn register_protocol(&self, scheme: &str) {
        info!(scheme, "Registered as default protocol client");
        self.state.write().protocols.push(scheme.to_string());
    }

    fn set_about_panel(&self, about: &AboutPanel) {
        self.state.write().about = Some(about.clone());
    }

    fn quit(&self) {
        self.state.write().quit = true;
    }
}

impl HostWindow for HeadlessHost {
    fn work_area(&self) -> WorkArea {
        self.work_area
    }

    fn create_window(&self, options: &WindowOptions) -> Arc<dyn RenderSurface> {
        let (surface, receiver) = ChannelSurface::pair();
        {
            let mut state = self.state.write();
            state.windows.push(options.clone());
            state.minimized = false;
        }
        if self.surfaces.send(receiver).is_err() {
            debug!("Nobody is listening for new windows");
        }
        Arc::new(surface)
    }

    fn is_minimized(&self) -> bool {
        self.state.read().minimized
    }

    fn restore(&self) {
        let mut state = self.state.write();
        state.minimized = false;
        state.restores += 1;
    }

    fn focus(&self) {
        self.state.write().focuses += 1;
    }

    fn popup_menu(&self, menu: ContextMenu) {
        debug!(?menu, items = menu.items().len(), "Context menu");
        self.state.write().menus.push(menu);
    }
}
