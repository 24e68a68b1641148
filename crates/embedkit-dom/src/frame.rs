//! Frame Handles
//!
//! Handles onto an embedded document and its content window.

use url::Url;

/// Embedded document
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDocument {
    pub id: u64,
    pub url: Option<Url>,
}

impl FrameDocument {
    pub fn new(id: u64) -> Self {
        Self { id, url: None }
    }

    pub fn with_url(id: u64, url: Url) -> Self {
        Self { id, url: Some(url) }
    }
}

/// Content window of an embedded frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameWindow {
    document: Option<FrameDocument>,
}

impl FrameWindow {
    pub fn new(document: Option<FrameDocument>) -> Self {
        Self { document }
    }

    pub fn document(&self) -> Option<&FrameDocument> {
        self.document.as_ref()
    }
}

/// Handle onto one embedded frame element
///
/// The content document is reachable through two equivalent routes, matching
/// what host platforms expose: directly, or through the content window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameHandle {
    content_document: Option<FrameDocument>,
    content_window: Option<FrameWindow>,
}

impl FrameHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: FrameDocument) -> Self {
        Self {
            content_document: Some(document),
            content_window: None,
        }
    }

    pub fn with_window(window: FrameWindow) -> Self {
        Self {
            content_document: None,
            content_window: Some(window),
        }
    }

    pub fn content_document(&self) -> Option<&FrameDocument> {
        self.content_document.as_ref()
    }

    pub fn content_window(&self) -> Option<&FrameWindow> {
        self.content_window.as_ref()
    }
}
