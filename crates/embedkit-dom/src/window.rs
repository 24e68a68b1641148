//! Window Context
//!
//! Host window state: location, screen, message delivery, entropy.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use url::Url;

/// Window construction error
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("invalid location url: {0}")]
    InvalidLocation(#[from] url::ParseError),
}

/// Screen dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

/// Source of cryptographic-quality random bytes
pub trait EntropySource {
    /// Fill `buf`, false when the source is unavailable
    fn fill(&mut self, buf: &mut [u8]) -> bool;
}

/// OS-backed entropy
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> bool {
        getrandom::fill(buf).is_ok()
    }
}

/// Host window context
///
/// Owns the state the embed component and the ad utilities read: the
/// location, screen dimensions, the inbound message queue, and the window's
/// entropy sources. Single-threaded; messages are delivered in arrival order
/// when the owner drains the queue.
pub struct WindowContext {
    location: Url,
    screen: Screen,
    entropy: Box<dyn EntropySource>,
    weak_rng: SmallRng,
    pending: Vec<Value>,
}

impl WindowContext {
    /// Window with OS-backed entropy
    pub fn new(location: Url, screen: Screen) -> Self {
        Self::with_entropy(location, screen, Box::new(OsEntropy))
    }

    /// Window with an explicit entropy source
    pub fn with_entropy(location: Url, screen: Screen, entropy: Box<dyn EntropySource>) -> Self {
        Self {
            location,
            screen,
            entropy,
            weak_rng: SmallRng::seed_from_u64(Self::clock_seed()),
            pending: Vec::new(),
        }
    }

    /// Parse `href` as the window location
    pub fn from_href(href: &str, screen: Screen) -> Result<Self, WindowError> {
        Ok(Self::new(Url::parse(href)?, screen))
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Queue an inbound message delivered to this window
    pub fn post_message(&mut self, data: Value) {
        tracing::trace!(queued = self.pending.len() + 1, "window message posted");
        self.pending.push(data);
    }

    /// Take pending messages in arrival order
    pub fn drain_messages(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.pending)
    }

    /// Random bytes from the crypto source, None when unavailable
    pub fn crypto_random_bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        let mut bytes = vec![0u8; n];
        if self.entropy.fill(&mut bytes) {
            Some(bytes)
        } else {
            None
        }
    }

    /// Non-cryptographic random value in [0, 1)
    pub fn weak_random(&mut self) -> f64 {
        self.weak_rng.random()
    }

    /// Wall-clock milliseconds since the epoch
    pub fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

impl fmt::Debug for WindowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowContext")
            .field("location", &self.location.as_str())
            .field("screen", &self.screen)
            .field("pending", &self.pending.len())
            .finish()
    }
}
