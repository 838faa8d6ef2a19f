use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::MergeError;
use crate::theme::GroupName;

/// Extension of group fragment files
const FRAGMENT_EXTENSION: &str = "json";

/// Parsed group fragments keyed by group name (lexical order)
pub type Fragments = BTreeMap<GroupName, Value>;

/// Check whether a path looks like a group fragment (*.json)
#[inline]
fn is_fragment_file(path: &Path) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(FRAGMENT_EXTENSION)
}

/// List fragment files directly inside the groups directory, sorted by file name
pub fn list_fragment_files(groups_dir: &Path) -> Result<Vec<PathBuf>, MergeError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(groups_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| groups_dir.to_path_buf());
            MergeError::FragmentRead {
                path,
                source: e.into(),
            }
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !is_fragment_file(path) {
            debug!("Skipping non-fragment entry: {}", path.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Read and parse a single fragment file
pub fn load_fragment(path: &Path) -> Result<Value, MergeError> {
    let content = fs::read_to_string(path).map_err(|source| MergeError::FragmentRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| MergeError::FragmentParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every group fragment in config/custom/groups/.
///
/// A missing groups directory yields an empty set.
#[must_use = "this returns the loaded fragments which should be merged"]
pub fn load_fragments(groups_dir: &Path) -> Result<Fragments, MergeError> {
    let mut fragments = Fragments::new();

    if !groups_dir.is_dir() {
        info!(
            "No custom groups directory found: {} (skipping)",
            groups_dir.display()
        );
        return Ok(fragments);
    }

    let files = list_fragment_files(groups_dir)?;
    if files.is_empty() {
        info!("No custom JSON files in: {}", groups_dir.display());
        return Ok(fragments);
    }

    for path in files {
        let Some(name) = GroupName::from_path(&path) else {
            debug!("Skipping fragment without a usable name: {}", path.display());
            continue;
        };

        let value = load_fragment(&path)?;
        info!("Loaded custom config: {}", path.display());
        fragments.insert(name, value);
    }

    Ok(fragments)
}
