//! embedkit DOM
//!
//! Host-side primitives the embed component runs against.
//!
//! Features:
//! - Window context: location, screen, message delivery, entropy
//! - Ordered attribute maps for embed elements
//! - Rectangle geometry for viewport intersection checks
//! - Frame handles onto embedded documents
//! - The embed-size message contract

pub mod attributes;
pub mod frame;
pub mod geometry;
pub mod message;
pub mod window;

pub use attributes::AttrMap;
pub use frame::{FrameDocument, FrameHandle, FrameWindow};
pub use geometry::Rect;
pub use message::{EMBED_SIZE, SizeReport, coerce_number, is_truthy};
pub use window::{EntropySource, OsEntropy, Screen, WindowContext, WindowError};
