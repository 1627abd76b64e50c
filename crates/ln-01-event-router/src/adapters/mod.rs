//! Adapters layer (Hexagonal Architecture)
//!
//! Render surface implementations.

mod channel;
mod recording;

pub use channel::{ChannelSurface, SurfaceReceiver};
pub use recording::RecordingSurface;
