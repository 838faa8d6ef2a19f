//! # Publii Config Merge
//!
//! Merges a split-up Publii theme configuration into a single `config.json`.
//!
//! A theme keeps its settings in `config/main.json` plus one JSON fragment per
//! group in `config/custom/groups/`. The display order of the groups lives in
//! `config/custom/group_order/order.json`, which this crate keeps in sync with
//! the fragments on disk before attaching them to the main config under
//! `customConfig`.
//!
//! ## Usage
//!
//! ```ignore
//! use publii_config_merge::compiler::compile;
//! use publii_config_merge::config::Config;
//!
//! let report = compile(&config)?;
//! println!("{} groups merged", report.groups.len());
//! ```

/// Merge orchestration
pub mod compiler;

/// CLI configuration and argument parsing
pub mod config;

/// Error types for merge operations
pub mod error;

/// Tracing subscriber setup
pub mod logging;

/// Main config reading and `customConfig` assembly
pub mod merger;

/// Group order record and synchronization
pub mod order;

/// Group fragment loading
pub mod scanner;

/// Theme root location and group names
pub mod theme;

/// JSON rendering and output
pub mod writer;
