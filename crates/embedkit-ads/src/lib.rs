//! embedkit Ads
//!
//! Utility surface for story-ad placements.
//!
//! Features:
//! - 128-bit placement identifiers with a legacy fallback
//! - Call-to-action text localization
//! - Frame-document access

pub mod localization;
pub mod utils;

pub use localization::{
    CtaType, LocalizationService, LocalizedStringId, StringTable, localize_cta_text,
};
pub use utils::{frame_doc, unique_id};
