//! Visibility Tracking
//!
//! Viewport intersection tracking for mounted embeds. Observed embeds are
//! re-checked against the viewport on each update; events are emitted when
//! an embed enters or leaves the viewport or crosses a configured ratio
//! threshold, then consumed in a batch.

use std::collections::HashMap;

use embedkit_dom::Rect;

/// One visibility transition for an observed embed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub target: u64,
    pub is_intersecting: bool,
    pub ratio: f64,
    pub time: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct ObservedState {
    last_ratio: Option<f64>,
    last_intersecting: Option<bool>,
}

/// Tracks observed embeds against the viewport
#[derive(Debug)]
pub struct VisibilityTracker {
    thresholds: Vec<f64>,
    observed: HashMap<u64, ObservedState>,
    pending: Vec<VisibilityEvent>,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::with_thresholds(vec![0.0])
    }

    /// Tracker notifying on the given ratio thresholds
    pub fn with_thresholds(thresholds: Vec<f64>) -> Self {
        Self {
            thresholds,
            observed: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Observe an embed element
    pub fn observe(&mut self, target: u64) {
        self.observed.insert(target, ObservedState::default());
    }

    /// Stop observing; pending events for the target are dropped
    pub fn unobserve(&mut self, target: u64) {
        self.observed.remove(&target);
        self.pending.retain(|e| e.target != target);
    }

    /// Drop all observations
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.pending.clear();
    }

    pub fn is_observing(&self, target: u64) -> bool {
        self.observed.contains_key(&target)
    }

    /// Re-check every observed embed against the viewport
    ///
    /// The first check after `observe` always notifies, establishing the
    /// initial visibility. Targets missing from `rects` are skipped.
    pub fn update(&mut self, viewport: Rect, rects: &HashMap<u64, Rect>, time: f64) {
        for (target, state) in &mut self.observed {
            let Some(rect) = rects.get(target) else {
                continue;
            };
            let ratio = rect.intersection_ratio(&viewport);
            let is_intersecting = ratio > 0.0;

            let notify = match (state.last_intersecting, state.last_ratio) {
                (None, _) | (_, None) => true,
                (Some(prev_in), Some(prev_ratio)) => {
                    prev_in != is_intersecting
                        || self
                            .thresholds
                            .iter()
                            .any(|&t| (prev_ratio < t) != (ratio < t))
                }
            };

            if notify {
                state.last_ratio = Some(ratio);
                state.last_intersecting = Some(is_intersecting);
                tracing::trace!(embed = *target, ratio, is_intersecting, "visibility change");
                self.pending.push(VisibilityEvent {
                    target: *target,
                    is_intersecting,
                    ratio,
                    time,
                });
            }
        }
    }

    /// Take pending events in emission order
    pub fn take_events(&mut self) -> Vec<VisibilityEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn rects(target: u64, rect: Rect) -> HashMap<u64, Rect> {
        let mut map = HashMap::new();
        map.insert(target, rect);
        map
    }

    #[test]
    fn test_first_update_notifies() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(1);

        tracker.update(viewport(), &rects(1, Rect::new(0.0, 100.0, 200.0, 200.0)), 0.0);

        let events = tracker.take_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_intersecting);
        assert_eq!(events[0].target, 1);
    }

    #[test]
    fn test_exit_and_reenter() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(1);

        tracker.update(viewport(), &rects(1, Rect::new(0.0, 100.0, 200.0, 200.0)), 0.0);
        tracker.take_events();

        // Scrolled out
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 900.0, 200.0, 200.0)), 16.0);
        let events = tracker.take_events();
        assert_eq!(events.len(), 1);
        assert!(!events[0].is_intersecting);

        // Unchanged position emits nothing
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 900.0, 200.0, 200.0)), 32.0);
        assert!(!tracker.has_pending());

        // Back into view
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 100.0, 200.0, 200.0)), 48.0);
        let events = tracker.take_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_intersecting);
    }

    #[test]
    fn test_threshold_crossing() {
        let mut tracker = VisibilityTracker::with_thresholds(vec![0.5]);
        tracker.observe(1);

        // Fully visible
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 0.0, 200.0, 200.0)), 0.0);
        tracker.take_events();

        // Still intersecting but below the 0.5 threshold
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 550.0, 200.0, 200.0)), 16.0);
        let events = tracker.take_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_intersecting);
        assert!(events[0].ratio < 0.5);
    }

    #[test]
    fn test_unobserve_drops_pending() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(1);
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 100.0, 200.0, 200.0)), 0.0);

        assert!(tracker.has_pending());
        tracker.unobserve(1);
        assert!(!tracker.has_pending());
        assert!(!tracker.is_observing(1));

        // Further updates are silent
        tracker.update(viewport(), &rects(1, Rect::new(0.0, 900.0, 200.0, 200.0)), 16.0);
        assert!(!tracker.has_pending());
    }
}
