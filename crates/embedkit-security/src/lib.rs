//! embedkit Security
//!
//! Security attributes carried on embedded content.
//!
//! Features:
//! - Sandbox capability flags
//! - Referrer policy

pub mod referrer;
pub mod sandbox;

pub use referrer::ReferrerPolicy;
pub use sandbox::{SandboxFlag, SandboxFlags};
