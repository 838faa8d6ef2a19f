//! Theme root location and group naming for Publii theme configs.
//!
//! Provides the ancestor search for the theme root marker, the set of paths
//! derived from that root, and a type-safe wrapper for group names using
//! `Arc<str>`.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::MergeError;

/// Empty sentinel file marking the theme root
pub const THEME_ROOT_MARKER: &str = ".publii_theme_root";

/// Key under which merged groups are attached to the main config
pub const CUSTOM_CONFIG_KEY: &str = "customConfig";

/// Group name taken from a fragment file stem (e.g., "colors" for colors.json).
/// Newtype wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupName(Arc<str>);

impl GroupName {
    /// Create a validated GroupName, returning None for an empty name
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            None
        } else {
            Some(Self(Arc::from(s)))
        }
    }

    /// Derive the group name from a fragment path (file stem)
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(Self::parse)
    }

    /// Get the inner string reference
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for GroupName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Join group names for log lines ("a, b, c")
pub fn join_names(names: &[GroupName]) -> String {
    names
        .iter()
        .map(GroupName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A located theme root and the config paths derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRoot {
    /// Directory containing the marker file
    pub path: PathBuf,
}

impl ThemeRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// config/
    pub fn config_dir(&self) -> PathBuf {
        self.path.join("config")
    }

    /// config/main.json
    pub fn main_config_path(&self) -> PathBuf {
        self.config_dir().join("main.json")
    }

    /// config/custom/groups/
    pub fn groups_dir(&self) -> PathBuf {
        self.config_dir().join("custom").join("groups")
    }

    /// config/custom/group_order/order.json
    pub fn order_path(&self) -> PathBuf {
        self.config_dir()
            .join("custom")
            .join("group_order")
            .join("order.json")
    }

    /// config.json in the theme root
    pub fn output_path(&self) -> PathBuf {
        self.path.join("config.json")
    }
}

/// Find the nearest directory (start first, then its ancestors) that contains
/// the marker file. Only regular files count as markers.
pub fn locate_theme_root(start: &Path, marker: &str) -> Result<ThemeRoot, MergeError> {
    for candidate in start.ancestors() {
        let marker_path = candidate.join(marker);
        if marker_path.is_file() {
            info!("Theme root: {}", candidate.display());
            return Ok(ThemeRoot::new(candidate));
        }
        debug!("No marker in {}", candidate.display());
    }

    Err(MergeError::RootNotFound {
        start: start.to_path_buf(),
        marker: marker.to_string(),
    })
}
