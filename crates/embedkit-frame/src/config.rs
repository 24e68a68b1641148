//! Embed Configuration
//!
//! Mount-time attributes and callbacks for a resizable embed.

use std::fmt;

use embedkit_dom::AttrMap;
use embedkit_security::{ReferrerPolicy, SandboxFlags};

use crate::surface::EmbedSurface;

/// Callback fired when the embedded document finishes loading
pub type LoadCallback = Box<dyn FnMut()>;

/// Host-side resize request, invoked with (height, width)
pub type ResizeRequest = Box<dyn FnMut(f64, f64)>;

/// Mount configuration for a resizable embed
///
/// Known fields map onto the platform attribute names; everything in
/// `extra` passes through unchanged. When `request_resize` is set the host
/// container takes over sizing and the embed fills it.
#[derive(Default)]
pub struct EmbedConfig {
    pub src: Option<String>,
    pub srcdoc: Option<String>,
    pub sandbox: Option<SandboxFlags>,
    pub referrer_policy: Option<ReferrerPolicy>,
    pub allow_fullscreen: bool,
    pub allow_payment_request: bool,
    pub allow_transparency: bool,
    pub on_load: Option<LoadCallback>,
    pub request_resize: Option<ResizeRequest>,
    pub extra: AttrMap,
}

impl EmbedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the mount attributes onto a surface
    ///
    /// Boolean attributes appear only when set, unknown attributes are
    /// forwarded verbatim, and the frame border is always forced off.
    pub fn apply_to(&self, surface: &mut dyn EmbedSurface) {
        if let Some(src) = &self.src {
            surface.set_attribute("src", src);
        }
        if let Some(srcdoc) = &self.srcdoc {
            surface.set_attribute("srcdoc", srcdoc);
        }
        if let Some(sandbox) = &self.sandbox {
            surface.set_attribute("sandbox", &sandbox.to_string());
        }
        if self.allow_fullscreen {
            surface.set_attribute("allowfullscreen", "");
        }
        if self.allow_payment_request {
            surface.set_attribute("allowpaymentrequest", "");
        }
        if self.allow_transparency {
            surface.set_attribute("allowtransparency", "");
        }
        if let Some(policy) = self.referrer_policy {
            surface.set_attribute("referrerpolicy", policy.as_token());
        }
        for (name, value) in self.extra.iter() {
            surface.set_attribute(name, value);
        }
        surface.set_attribute("frameborder", "0");
    }
}

impl fmt::Debug for EmbedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbedConfig")
            .field("src", &self.src)
            .field("srcdoc", &self.srcdoc.as_ref().map(|s| s.len()))
            .field("sandbox", &self.sandbox)
            .field("referrer_policy", &self.referrer_policy)
            .field("allow_fullscreen", &self.allow_fullscreen)
            .field("allow_payment_request", &self.allow_payment_request)
            .field("allow_transparency", &self.allow_transparency)
            .field("on_load", &self.on_load.is_some())
            .field("request_resize", &self.request_resize.is_some())
            .field("extra", &self.extra)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::AttrSurface;
    use embedkit_security::SandboxFlag;

    #[test]
    fn test_apply_attributes() {
        let mut extra = AttrMap::new();
        extra.set("title", "ad creative");
        extra.set("loading", "lazy");

        let config = EmbedConfig {
            src: Some("https://ads.example/creative".to_string()),
            sandbox: Some(SandboxFlags::new().allow(SandboxFlag::AllowScripts)),
            referrer_policy: Some(ReferrerPolicy::NoReferrer),
            allow_fullscreen: true,
            extra,
            ..Default::default()
        };

        let mut surface = AttrSurface::new();
        config.apply_to(&mut surface);

        let attrs = surface.attrs();
        assert_eq!(attrs.get("src"), Some("https://ads.example/creative"));
        assert_eq!(attrs.get("sandbox"), Some("allow-scripts"));
        assert_eq!(attrs.get("referrerpolicy"), Some("no-referrer"));
        assert_eq!(attrs.get("allowfullscreen"), Some(""));
        assert_eq!(attrs.get("title"), Some("ad creative"));
        assert_eq!(attrs.get("loading"), Some("lazy"));
        assert_eq!(attrs.get("frameborder"), Some("0"));
    }

    #[test]
    fn test_unset_booleans_absent() {
        let config = EmbedConfig::new();
        let mut surface = AttrSurface::new();
        config.apply_to(&mut surface);

        assert!(!surface.attrs().has("allowfullscreen"));
        assert!(!surface.attrs().has("allowpaymentrequest"));
        assert!(!surface.attrs().has("allowtransparency"));
        assert_eq!(surface.attrs().get("frameborder"), Some("0"));
    }

    #[test]
    fn test_srcdoc_passthrough() {
        let config = EmbedConfig {
            srcdoc: Some("<p>inline</p>".to_string()),
            ..Default::default()
        };

        let mut surface = AttrSurface::new();
        config.apply_to(&mut surface);

        assert_eq!(surface.attrs().get("srcdoc"), Some("<p>inline</p>"));
        assert!(!surface.attrs().has("src"));
    }
}
