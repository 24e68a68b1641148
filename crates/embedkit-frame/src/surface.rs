//! Embed Surface
//!
//! Render target a mounted embed writes its attributes and negotiated
//! size into. The component only ever talks to this trait, so the resize
//! decision runs the same against a real element or a test surface.

use std::fmt;

use embedkit_dom::AttrMap;

/// Sizing value for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeValue {
    /// Intrinsic size in CSS pixels
    Px(f64),
    /// Occupy 100% of the container box, ceding size control to it
    FillContainer,
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{}", *v as i64),
            Self::Px(v) => write!(f, "{v}"),
            Self::FillContainer => f.write_str("100%"),
        }
    }
}

/// Render target for a mounted embed
pub trait EmbedSurface {
    /// Write a mount attribute
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Write whichever intrinsic size components are present
    fn set_intrinsic_size(&mut self, width: Option<f64>, height: Option<f64>);

    /// Cede both axes to the container
    fn set_fill_container(&mut self);

    /// Current width value, if one was written
    fn width(&self) -> Option<SizeValue>;

    /// Current height value, if one was written
    fn height(&self) -> Option<SizeValue>;
}

/// Surface backed by an attribute map
///
/// The concrete surface used by tests and the demo: size writes land both
/// in the typed fields and as `width`/`height` attribute text.
#[derive(Debug, Clone, Default)]
pub struct AttrSurface {
    attrs: AttrMap,
    width: Option<SizeValue>,
    height: Option<SizeValue>,
}

impl AttrSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All attributes written so far
    pub fn attrs(&self) -> &AttrMap {
        &self.attrs
    }
}

impl EmbedSurface for AttrSurface {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attrs.set(name, value);
    }

    fn set_intrinsic_size(&mut self, width: Option<f64>, height: Option<f64>) {
        if let Some(w) = width {
            let value = SizeValue::Px(w);
            self.width = Some(value);
            self.attrs.set("width", value.to_string());
        }
        if let Some(h) = height {
            let value = SizeValue::Px(h);
            self.height = Some(value);
            self.attrs.set("height", value.to_string());
        }
    }

    fn set_fill_container(&mut self) {
        self.width = Some(SizeValue::FillContainer);
        self.height = Some(SizeValue::FillContainer);
        self.attrs.set("width", SizeValue::FillContainer.to_string());
        self.attrs.set("height", SizeValue::FillContainer.to_string());
    }

    fn width(&self) -> Option<SizeValue> {
        self.width
    }

    fn height(&self) -> Option<SizeValue> {
        self.height
    }
}
