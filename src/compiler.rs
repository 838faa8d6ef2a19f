//! Config merge orchestration.
//!
//! Runs the whole merge in sequence:
//! - locate the theme root from the starting directory
//! - read config/main.json
//! - load group fragments and synchronize the group order
//! - write the order file and the merged config.json

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::MergeError;
use crate::merger::{merge, read_main_config};
use crate::order::GroupOrder;
use crate::scanner::load_fragments;
use crate::theme::{locate_theme_root, GroupName};
use crate::writer::write_config;

/// Result of a merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Directory holding the marker file
    pub theme_root: PathBuf,
    /// Merged config path
    pub output_path: PathBuf,
    /// Groups in `customConfig`, in order
    pub groups: Vec<GroupName>,
    /// Groups newly appended to the order file
    pub added: Vec<GroupName>,
    /// Groups dropped from the order file
    pub removed: Vec<GroupName>,
    /// Bytes written to config.json (None for a dry run)
    pub written: Option<u64>,
}

impl MergeReport {
    pub fn is_dry_run(&self) -> bool {
        self.written.is_none()
    }
}

/// Merge the theme config found from `config.start_dir`
pub fn compile(config: &Config) -> Result<MergeReport, MergeError> {
    let root = locate_theme_root(&config.start_dir, &config.marker)?;

    // Read before any write so a broken main config leaves the order file alone
    let main = read_main_config(&root.main_config_path())?;
    let fragments = load_fragments(&root.groups_dir())?;

    let order_path = root.order_path();
    let present: BTreeSet<GroupName> = fragments.keys().cloned().collect();
    let sync = GroupOrder::load(&order_path)?.synchronize(&present);

    let merged = merge(main, &fragments, &sync.order);
    let output_path = root.output_path();

    let written = if config.dry_run {
        info!(
            "Dry run: not writing {} or {}",
            order_path.display(),
            output_path.display()
        );
        None
    } else {
        sync.order.persist(&order_path)?;
        Some(write_config(&output_path, &merged, config.escape)?)
    };

    Ok(MergeReport {
        theme_root: root.path,
        output_path,
        groups: sync.order.entries().to_vec(),
        added: sync.added,
        removed: sync.removed,
        written,
    })
}
