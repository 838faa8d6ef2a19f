//! Group order record for `customConfig`.
//!
//! The order file (`config/custom/group_order/order.json`) is a JSON array of
//! group names. It is kept in step with the fragments on disk: names of
//! deleted groups are dropped, new groups are appended in lexical order, and
//! every surviving entry keeps its relative position.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::MergeError;
use crate::theme::{join_names, GroupName};
use crate::writer::{render_json, Escape};

/// On-disk shape of the order file: a bare array of names
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
struct OrderRecord(Vec<String>);

/// Persisted ordering of group names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOrder {
    entries: Vec<GroupName>,
}

/// Outcome of reconciling an order record with the groups on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSync {
    /// Synchronized order
    pub order: GroupOrder,
    /// Groups appended to the order (new fragment files)
    pub added: Vec<GroupName>,
    /// Groups dropped from the order (fragment files gone)
    pub removed: Vec<GroupName>,
}

impl OrderSync {
    #[inline]
    pub fn is_changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

impl GroupOrder {
    /// Build an order from names; duplicates collapse to their first occurrence
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = GroupName>,
    {
        let mut seen = HashSet::new();
        let entries = names
            .into_iter()
            .filter(|name| {
                let first = seen.insert(name.clone());
                if !first {
                    warn!("Duplicate group '{}' in group order (ignored)", name);
                }
                first
            })
            .collect();
        Self { entries }
    }

    /// Parse an order record from its JSON text.
    /// Empty names can never match a fragment and are dropped.
    pub fn parse(json: &str) -> Result<Self, String> {
        let OrderRecord(raw) = serde_json::from_str(json)
            .map_err(|e| format!("expected a JSON array of group names: {e}"))?;

        let names: Vec<GroupName> = raw
            .iter()
            .filter_map(|entry| {
                let name = GroupName::parse(entry);
                if name.is_none() {
                    warn!("Empty group name in group order (ignored)");
                }
                name
            })
            .collect();
        Ok(Self::new(names))
    }

    /// Load the order file; a missing file is an empty order
    pub fn load(path: &Path) -> Result<Self, MergeError> {
        if !path.exists() {
            info!(
                "Group order file not found: {} (will be created)",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| MergeError::OrderPersist {
            path: path.to_path_buf(),
            reason: format!("cannot read: {e}"),
        })?;

        Self::parse(&content).map_err(|reason| MergeError::OrderPersist {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn entries(&self) -> &[GroupName] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reconcile with the current set of group names.
    ///
    /// `present` is iterated in its own order for appending, so pass a sorted
    /// set to get lexical append order.
    pub fn synchronize(&self, present: &BTreeSet<GroupName>) -> OrderSync {
        let mut removed = Vec::new();
        let mut entries = Vec::with_capacity(present.len());

        for name in &self.entries {
            if present.contains(name) {
                entries.push(name.clone());
            } else {
                removed.push(name.clone());
            }
        }

        let known: HashSet<&GroupName> = self.entries.iter().collect();
        let added: Vec<GroupName> = present
            .iter()
            .filter(|name| !known.contains(name))
            .cloned()
            .collect();
        entries.extend(added.iter().cloned());

        if !removed.is_empty() {
            info!("Removed groups: {}", join_names(&removed));
        }
        if !added.is_empty() {
            info!("New groups: {}", join_names(&added));
        }

        OrderSync {
            order: GroupOrder { entries },
            added,
            removed,
        }
    }

    /// Render the order record as written to disk
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let record = OrderRecord(self.entries.iter().map(GroupName::to_string).collect());
        render_json(&record, Escape::Unicode)
    }

    /// Write the order file, creating its directory if needed. Always rewrites.
    pub fn persist(&self, path: &Path) -> Result<(), MergeError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| MergeError::CreateDirFailed {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = self.to_json().map_err(|e| MergeError::OrderPersist {
            path: path.to_path_buf(),
            reason: format!("cannot serialize: {e}"),
        })?;

        fs::write(path, content).map_err(|e| MergeError::OrderPersist {
            path: path.to_path_buf(),
            reason: format!("cannot write: {e}"),
        })?;

        info!("Updated group order: {}", path.display());
        Ok(())
    }
}
