//! Embed Sandbox
//!
//! Capability restrictions carried on an embed's sandbox attribute.

use std::fmt;

/// Individual sandbox capability token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SandboxFlag {
    AllowDownloads,
    AllowForms,
    AllowModals,
    AllowOrientationLock,
    AllowPointerLock,
    AllowPopups,
    AllowPopupsToEscapeSandbox,
    AllowPresentation,
    AllowSameOrigin,
    AllowScripts,
    AllowTopNavigation,
    AllowTopNavigationByUserActivation,
}

impl SandboxFlag {
    /// Attribute token for this flag
    pub fn token(self) -> &'static str {
        match self {
            Self::AllowDownloads => "allow-downloads",
            Self::AllowForms => "allow-forms",
            Self::AllowModals => "allow-modals",
            Self::AllowOrientationLock => "allow-orientation-lock",
            Self::AllowPointerLock => "allow-pointer-lock",
            Self::AllowPopups => "allow-popups",
            Self::AllowPopupsToEscapeSandbox => "allow-popups-to-escape-sandbox",
            Self::AllowPresentation => "allow-presentation",
            Self::AllowSameOrigin => "allow-same-origin",
            Self::AllowScripts => "allow-scripts",
            Self::AllowTopNavigation => "allow-top-navigation",
            Self::AllowTopNavigationByUserActivation => "allow-top-navigation-by-user-activation",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Some(match token.to_ascii_lowercase().as_str() {
            "allow-downloads" => Self::AllowDownloads,
            "allow-forms" => Self::AllowForms,
            "allow-modals" => Self::AllowModals,
            "allow-orientation-lock" => Self::AllowOrientationLock,
            "allow-pointer-lock" => Self::AllowPointerLock,
            "allow-popups" => Self::AllowPopups,
            "allow-popups-to-escape-sandbox" => Self::AllowPopupsToEscapeSandbox,
            "allow-presentation" => Self::AllowPresentation,
            "allow-same-origin" => Self::AllowSameOrigin,
            "allow-scripts" => Self::AllowScripts,
            "allow-top-navigation" => Self::AllowTopNavigation,
            "allow-top-navigation-by-user-activation" => Self::AllowTopNavigationByUserActivation,
            _ => return None,
        })
    }
}

/// Parsed sandbox attribute, fully restricted when empty
///
/// Flags are kept sorted and deduplicated so the serialized attribute is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxFlags {
    flags: Vec<SandboxFlag>,
}

impl SandboxFlags {
    /// Fully restricted sandbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse attribute text; unknown tokens are ignored
    pub fn parse(attribute: &str) -> Self {
        let mut flags = Self::new();
        for token in attribute.split_whitespace() {
            if let Some(flag) = SandboxFlag::from_token(token) {
                flags.insert(flag);
            }
        }
        flags
    }

    /// Builder-style grant
    pub fn allow(mut self, flag: SandboxFlag) -> Self {
        self.insert(flag);
        self
    }

    fn insert(&mut self, flag: SandboxFlag) {
        if let Err(index) = self.flags.binary_search(&flag) {
            self.flags.insert(index, flag);
        }
    }

    /// Check if a capability is granted
    pub fn has(&self, flag: SandboxFlag) -> bool {
        self.flags.binary_search(&flag).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn allows_scripts(&self) -> bool {
        self.has(SandboxFlag::AllowScripts)
    }

    pub fn allows_same_origin(&self) -> bool {
        self.has(SandboxFlag::AllowSameOrigin)
    }

    pub fn allows_forms(&self) -> bool {
        self.has(SandboxFlag::AllowForms)
    }

    pub fn allows_popups(&self) -> bool {
        self.has(SandboxFlag::AllowPopups)
    }

    pub fn allows_top_navigation(&self) -> bool {
        self.has(SandboxFlag::AllowTopNavigation)
    }

    /// Granted flags in serialization order
    pub fn iter(&self) -> impl Iterator<Item = SandboxFlag> + '_ {
        self.flags.iter().copied()
    }
}

impl fmt::Display for SandboxFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.flags.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(flag.token())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sandbox() {
        let flags = SandboxFlags::parse("allow-scripts allow-same-origin");

        assert!(flags.allows_scripts());
        assert!(flags.allows_same_origin());
        assert!(!flags.allows_forms());
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let flags = SandboxFlags::parse("allow-scripts allow-everything");

        assert!(flags.allows_scripts());
        assert_eq!(flags.iter().count(), 1);
    }

    #[test]
    fn test_empty_sandbox() {
        let flags = SandboxFlags::new();

        assert!(flags.is_empty());
        assert!(!flags.allows_scripts());
        assert!(!flags.allows_forms());
    }

    #[test]
    fn test_serialize_deterministic() {
        let parsed = SandboxFlags::parse("allow-same-origin allow-scripts allow-scripts");
        let built = SandboxFlags::new()
            .allow(SandboxFlag::AllowScripts)
            .allow(SandboxFlag::AllowSameOrigin);

        assert_eq!(parsed, built);
        assert_eq!(parsed.to_string(), "allow-same-origin allow-scripts");
    }
}
