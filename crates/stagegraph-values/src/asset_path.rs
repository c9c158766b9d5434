//! Asset path values.
//!
//! An [`AssetPath`] keeps the path exactly as authored in the scene,
//! plus whatever the asset resolver produced for it. The parameter layer
//! only ever exchanges the authored path with the widget side; the
//! resolved form is carried for consumers that need the on-disk
//! location.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authored asset reference with optional resolution metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPath {
    /// The path as authored, e.g. `textures/x.exr`.
    path: String,
    /// The resolver output, if the asset has been resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resolved_path: Option<String>,
}

impl AssetPath {
    /// Creates an unresolved asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resolved_path: None,
        }
    }

    /// Creates an asset path together with its resolved location.
    pub fn with_resolved(path: impl Into<String>, resolved: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            resolved_path: Some(resolved.into()),
        }
    }

    /// Returns the authored path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the resolved location, if any.
    pub fn resolved_path(&self) -> Option<&str> {
        self.resolved_path.as_deref()
    }

    /// Returns true if no path has been authored.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl From<&str> for AssetPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for AssetPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Scene text formats delimit asset paths with '@'.
        write!(f, "@{}@", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unresolved() {
        let asset = AssetPath::new("textures/x.exr");
        assert_eq!(asset.path(), "textures/x.exr");
        assert_eq!(asset.resolved_path(), None);
        assert!(!asset.is_empty());
    }

    #[test]
    fn test_with_resolved() {
        let asset = AssetPath::with_resolved("textures/x.exr", "/show/textures/x.exr");
        assert_eq!(asset.path(), "textures/x.exr");
        assert_eq!(asset.resolved_path(), Some("/show/textures/x.exr"));
    }

    #[test]
    fn test_default_is_empty() {
        let asset = AssetPath::default();
        assert!(asset.is_empty());
        assert_eq!(asset.path(), "");
    }

    #[test]
    fn test_display() {
        let asset = AssetPath::new("geo/chair.usd");
        assert_eq!(asset.to_string(), "@geo/chair.usd@");
    }

    #[test]
    fn test_serde_skips_missing_resolution() {
        let asset = AssetPath::new("textures/x.exr");
        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json, serde_json::json!({ "path": "textures/x.exr" }));

        let back: AssetPath = serde_json::from_value(json).unwrap();
        assert_eq!(back, asset);
    }

    proptest::proptest! {
        #[test]
        fn prop_serde_round_trip(path in "[a-zA-Z0-9_/.]{0,32}") {
            let asset = AssetPath::new(path.clone());
            let json = serde_json::to_string(&asset).unwrap();
            let back: AssetPath = serde_json::from_str(&json).unwrap();
            proptest::prop_assert_eq!(back.path(), path.as_str());
            proptest::prop_assert_eq!(back, asset);
        }
    }
}
