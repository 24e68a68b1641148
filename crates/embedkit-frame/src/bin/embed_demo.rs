//! Embed Demo
//!
//! Drives one full size negotiation: an embed mounts, its content reports a
//! size while in view, and the size lands once the embed scrolls out.

use std::collections::HashMap;
use std::error::Error;

use embedkit_dom::{Rect, Screen, SizeReport, WindowContext};
use embedkit_frame::{AttrSurface, EmbedConfig, EmbedRegistry, VisibilityTracker};
use embedkit_security::SandboxFlags;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut win = WindowContext::from_href(
        "https://host.example/article",
        Screen { width: 1280, height: 800 },
    )?;
    let mut tracker = VisibilityTracker::new();
    let mut registry = EmbedRegistry::new();

    // One embed resizing itself, one delegating to the host container
    let direct = registry.mount(
        EmbedConfig {
            src: Some("https://ads.example/creative".to_string()),
            sandbox: Some(SandboxFlags::parse("allow-scripts allow-same-origin")),
            on_load: Some(Box::new(|| tracing::info!("creative loaded"))),
            ..Default::default()
        },
        Box::new(AttrSurface::new()),
        &mut tracker,
    );
    let delegated = registry.mount(
        EmbedConfig {
            src: Some("https://cards.example/widget".to_string()),
            request_resize: Some(Box::new(|height, width| {
                tracing::info!(height, width, "container asked to resize");
            })),
            ..Default::default()
        },
        Box::new(AttrSurface::new()),
        &mut tracker,
    );

    let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let mut rects = HashMap::new();
    rects.insert(direct, Rect::new(0.0, 500.0, 600.0, 300.0));
    rects.insert(delegated, Rect::new(640.0, 500.0, 400.0, 300.0));

    // Both embeds start in view
    tracker.update(viewport, &rects, 0.0);
    registry.pump_visibility(&mut tracker);
    registry.notify_load(direct);

    // Content reports its rendered size while still visible
    win.post_message(SizeReport { width: 600.0, height: 450.0 }.to_value());
    registry.pump_messages(&mut win);
    log_sizes(&registry, direct, "direct embed, in view");
    log_sizes(&registry, delegated, "delegated embed, in view");

    // Scrolling both embeds out of the viewport applies the pending size
    rects.insert(direct, Rect::new(0.0, 1500.0, 600.0, 300.0));
    rects.insert(delegated, Rect::new(640.0, 1500.0, 400.0, 300.0));
    tracker.update(viewport, &rects, 16.0);
    registry.pump_visibility(&mut tracker);
    log_sizes(&registry, direct, "direct embed, scrolled out");
    log_sizes(&registry, delegated, "delegated embed, scrolled out");

    registry.unmount(direct, &mut tracker);
    registry.unmount(delegated, &mut tracker);

    Ok(())
}

fn log_sizes(registry: &EmbedRegistry, id: u64, label: &str) {
    let Some(surface) = registry.get(id).and_then(|embed| embed.surface()) else {
        return;
    };
    let width = surface.width().map(|v| v.to_string());
    let height = surface.height().map(|v| v.to_string());
    tracing::info!(?width, ?height, "{label}");
}
