use std::path::PathBuf;
use thiserror::Error;

/// Config merge error types
#[derive(Error, Debug)]
pub enum MergeError {
    #[error(
        "Theme root not found: no '{marker}' file in {start} or any of its parents"
    )]
    RootNotFound { start: PathBuf, marker: String },

    #[error("Failed to read group fragment: {path}")]
    FragmentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in group fragment: {path}")]
    FragmentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid main config {path}: {reason}")]
    MainConfigParse { path: PathBuf, reason: String },

    #[error("Group order file {path}: {reason}")]
    OrderPersist { path: PathBuf, reason: String },

    #[error("Failed to create directory: {path}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON for {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_names_marker_and_start() {
        let err = MergeError::RootNotFound {
            start: PathBuf::from("/tmp/theme/assets"),
            marker: ".publii_theme_root".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".publii_theme_root"));
        assert!(msg.contains("/tmp/theme/assets"));
    }

    #[test]
    fn test_fragment_parse_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MergeError::FragmentParse {
            path: PathBuf::from("config/custom/groups/colors.json"),
            source,
        };
        assert!(err.to_string().contains("colors.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
