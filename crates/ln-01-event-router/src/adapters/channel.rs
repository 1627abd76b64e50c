//! Channel-backed render surface.
//!
//! The host side holds the `ChannelSurface`; the UI side drains the paired
//! `SurfaceReceiver`, either directly or as a `Stream`.

use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::domain::{DeferredEvent, DeliveryError};
use crate::ports::RenderSurface;

/// Sending half of a render surface backed by an unbounded tokio channel.
#[derive(Clone)]
pub struct ChannelSurface {
    sender: mpsc::UnboundedSender<DeferredEvent>,
}

/// Receiving half, owned by the UI.
pub struct SurfaceReceiver {
    receiver: mpsc::UnboundedReceiver<DeferredEvent>,
}

impl ChannelSurface {
    pub fn pair() -> (Self, SurfaceReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, SurfaceReceiver { receiver })
    }

    /// Whether the UI side is still listening.
    pub fn is_live(&self) -> bool {
        !self.sender.is_closed()
    }
}

impl RenderSurface for ChannelSurface {
    fn deliver(&self, event: &DeferredEvent) -> Result<(), DeliveryError> {
        self.sender
            .send(event.clone())
            .map_err(|_| DeliveryError::Closed)
    }
}

impl SurfaceReceiver {
    /// Wait for the next event. `None` once every sender is dropped.
    pub async fn recv(&mut self) -> Option<DeferredEvent> {
        self.receiver.recv().await
    }

    /// Next event if one is already waiting.
    pub fn try_recv(&mut self) -> Option<DeferredEvent> {
        self.receiver.try_recv().ok()
    }

    pub fn into_stream(self) -> UnboundedReceiverStream<DeferredEvent> {
        UnboundedReceiverStream::new(self.receiver)
    }
}
