//! embedkit Frame
//!
//! The resizable embed component: a wrapper for cross-origin embedded
//! documents that keeps the rendered box in sync with the size the content
//! reports, driven by inbound size-report messages and viewport
//! intersection.
//!
//! Features:
//! - Mount configuration with attribute pass-through via embedkit-security
//! - Injected render surfaces, so the resize decision needs no real element
//! - Viewport visibility tracking with threshold crossings
//! - The size-negotiation state machine and an embed registry

pub mod component;
pub mod config;
pub mod surface;
pub mod visibility;

pub use component::{EmbedRegistry, ResizableEmbed};
pub use config::{EmbedConfig, LoadCallback, ResizeRequest};
pub use surface::{AttrSurface, EmbedSurface, SizeValue};
pub use visibility::{VisibilityEvent, VisibilityTracker};
