//! Resizable Embed
//!
//! The size-negotiation component: a cross-origin embed reports the size it
//! wants through window messages, and the wrapper applies that size without
//! disturbing in-view layout. Direct size writes are deferred until the
//! embed leaves the viewport; a host-provided resize request takes over
//! sizing entirely when configured.

use serde_json::Value;

use embedkit_dom::{SizeReport, WindowContext, is_truthy};

use crate::config::EmbedConfig;
use crate::surface::EmbedSurface;
use crate::visibility::VisibilityTracker;

/// One mounted embed and its negotiation state
///
/// Holds the render surface while mounted, the last size report received,
/// and the current intersection flag (unknown visibility counts as not
/// intersecting). Every operation on an unmounted embed is a no-op.
pub struct ResizableEmbed {
    config: EmbedConfig,
    surface: Option<Box<dyn EmbedSurface>>,
    last_report: Option<SizeReport>,
    intersecting: bool,
}

impl ResizableEmbed {
    /// Wrap `surface`, applying the config's mount attributes
    pub fn mount(config: EmbedConfig, mut surface: Box<dyn EmbedSurface>) -> Self {
        config.apply_to(surface.as_mut());
        Self {
            config,
            surface: Some(surface),
            last_report: None,
            intersecting: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }

    /// Last size report received, if any
    pub fn last_report(&self) -> Option<SizeReport> {
        self.last_report
    }

    /// Render surface, while mounted
    pub fn surface(&self) -> Option<&dyn EmbedSurface> {
        self.surface.as_deref()
    }

    /// Inbound window message
    ///
    /// Only embed-size payloads are consumed; any other shape is ignored,
    /// never an error.
    pub fn handle_message(&mut self, data: &Value) {
        if self.surface.is_none() {
            return;
        }
        let Some(report) = SizeReport::from_value(data) else {
            return;
        };
        tracing::debug!(width = report.width, height = report.height, "embed size report");
        self.last_report = Some(report);
        self.attempt_resize();
    }

    /// Visibility transition from the tracker
    ///
    /// Leaving the viewport applies a pending size report; while
    /// intersecting, no resize action is taken.
    pub fn handle_visibility(&mut self, is_intersecting: bool) {
        if self.surface.is_none() {
            return;
        }
        self.intersecting = is_intersecting;
        if is_intersecting || self.last_report.is_none() {
            return;
        }
        self.attempt_resize();
    }

    /// Embedded document finished loading
    pub fn notify_load(&mut self) {
        if self.surface.is_none() {
            return;
        }
        if let Some(on_load) = self.config.on_load.as_mut() {
            on_load();
        }
    }

    /// Detach the surface; idempotent
    pub fn unmount(&mut self) -> Option<Box<dyn EmbedSurface>> {
        self.surface.take()
    }

    fn attempt_resize(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let Some(report) = self.last_report else {
            return;
        };
        let height = report.height;
        let width = report.width;
        if !is_truthy(height) && !is_truthy(width) {
            return;
        }
        if let Some(request) = self.config.request_resize.as_mut() {
            // The request fires both when a report arrives in-viewport and
            // again on exit; callers must tolerate the repeat.
            request(height, width);
            surface.set_fill_container();
        } else if !self.intersecting {
            surface.set_intrinsic_size(
                is_truthy(width).then_some(width),
                is_truthy(height).then_some(height),
            );
        }
    }
}

/// Owns mounted embeds and routes window events to them
///
/// The single-threaded pump: inbound window messages go to every mounted
/// embed's listener, tracker events go to the embed that owns the element.
/// Unmounted embeds are forgotten, so stale events fall on the floor.
#[derive(Default)]
pub struct EmbedRegistry {
    embeds: Vec<(u64, ResizableEmbed)>,
    next_id: u64,
}

impl EmbedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount an embed and register it with the tracker
    pub fn mount(
        &mut self,
        config: EmbedConfig,
        surface: Box<dyn EmbedSurface>,
        tracker: &mut VisibilityTracker,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let embed = ResizableEmbed::mount(config, surface);
        tracker.observe(id);
        self.embeds.push((id, embed));
        tracing::debug!(embed = id, "embed mounted");
        id
    }

    pub fn len(&self) -> usize {
        self.embeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeds.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&ResizableEmbed> {
        self.embeds
            .iter()
            .find(|(embed_id, _)| *embed_id == id)
            .map(|(_, embed)| embed)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut ResizableEmbed> {
        self.embeds
            .iter_mut()
            .find(|(embed_id, _)| *embed_id == id)
            .map(|(_, embed)| embed)
    }

    /// Deliver pending window messages to every mounted embed
    pub fn pump_messages(&mut self, win: &mut WindowContext) {
        for data in win.drain_messages() {
            for (_, embed) in &mut self.embeds {
                embed.handle_message(&data);
            }
        }
    }

    /// Route tracker events to their embeds, last entry per target wins
    pub fn pump_visibility(&mut self, tracker: &mut VisibilityTracker) {
        let events = tracker.take_events();
        for (i, event) in events.iter().enumerate() {
            let superseded = events[i + 1..].iter().any(|e| e.target == event.target);
            if superseded {
                continue;
            }
            if let Some(embed) = self.get_mut(event.target) {
                embed.handle_visibility(event.is_intersecting);
            }
        }
    }

    /// Embedded document load completed
    pub fn notify_load(&mut self, id: u64) {
        if let Some(embed) = self.get_mut(id) {
            embed.notify_load();
        }
    }

    /// Detach an embed; unknown ids are ignored
    pub fn unmount(
        &mut self,
        id: u64,
        tracker: &mut VisibilityTracker,
    ) -> Option<Box<dyn EmbedSurface>> {
        tracker.unobserve(id);
        let index = self.embeds.iter().position(|(embed_id, _)| *embed_id == id)?;
        let (_, mut embed) = self.embeds.remove(index);
        tracing::debug!(embed = id, "embed unmounted");
        embed.unmount()
    }
}
