//! Ad Utilities
//!
//! Entropy identifiers and frame-document access for ad placements.

use embedkit_dom::{FrameDocument, FrameHandle, WindowContext};

/// 128-bit-entropy identifier for one placement
///
/// Prefers the window's cryptographic byte source, rendered as concatenated
/// decimal byte values. When that source is unavailable the legacy fallback
/// concatenates values that are hard to guess but not cryptographic:
/// location, wall clock, a weak random value, and the screen dimensions.
/// The return value alone does not reveal which path produced it.
pub fn unique_id(win: &mut WindowContext) -> String {
    if let Some(bytes) = win.crypto_random_bytes(16) {
        return bytes.iter().map(|b| b.to_string()).collect();
    }

    let location = win.location().clone();
    let now_ms = win.now_ms();
    let weak_random = win.weak_random();
    let screen = win.screen();

    format!("{}{}{}{}{}", location, now_ms, weak_random, screen.width, screen.height)
}

/// Document of an embedded frame, from either exposed route
pub fn frame_doc(frame: &FrameHandle) -> Option<&FrameDocument> {
    frame
        .content_document()
        .or_else(|| frame.content_window().and_then(|w| w.document()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedkit_dom::{EntropySource, FrameWindow, Screen};
    use url::Url;

    struct NoEntropy;

    impl EntropySource for NoEntropy {
        fn fill(&mut self, _buf: &mut [u8]) -> bool {
            false
        }
    }

    fn screen() -> Screen {
        Screen { width: 1280, height: 800 }
    }

    #[test]
    fn test_unique_ids_differ() {
        let mut win =
            WindowContext::from_href("https://host.example/story", screen()).unwrap();

        let first = unique_id(&mut win);
        let second = unique_id(&mut win);

        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn test_fallback_id_shape() {
        let url = Url::parse("https://host.example/story").unwrap();
        let mut win = WindowContext::with_entropy(url, screen(), Box::new(NoEntropy));

        let id = unique_id(&mut win);

        assert!(id.starts_with("https://host.example/story"));
        assert!(id.contains("1280"));
        assert!(id.contains("800"));
        // A millisecond timestamp follows the location
        let tail = &id["https://host.example/story".len()..];
        assert!(tail.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_fallback_ids_differ() {
        let url = Url::parse("https://host.example/story").unwrap();
        let mut win = WindowContext::with_entropy(url, screen(), Box::new(NoEntropy));

        assert_ne!(unique_id(&mut win), unique_id(&mut win));
    }

    #[test]
    fn test_frame_doc_routes() {
        let doc = FrameDocument::new(3);

        let direct = FrameHandle::with_document(doc.clone());
        assert_eq!(frame_doc(&direct), Some(&doc));

        let via_window = FrameHandle::with_window(FrameWindow::new(Some(doc.clone())));
        assert_eq!(frame_doc(&via_window), Some(&doc));

        let empty = FrameHandle::new();
        assert!(frame_doc(&empty).is_none());

        let window_no_doc = FrameHandle::with_window(FrameWindow::new(None));
        assert!(frame_doc(&window_no_doc).is_none());
    }
}
