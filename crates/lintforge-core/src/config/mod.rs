//! Configuration system for lintforge
//!
//! This module provides the configuration-merging half of the toolkit:
//! - Deep merging of configuration fragments via [`ConfigMerger`], with
//!   per-key merge policies for `rules`, `overrides`, `plugins` and `extends`
//! - Config file discovery by traversing up directories
//! - Configuration inheritance (`extends` field), resolved by folding the
//!   extended files through the merge engine
//!
//! ## Configuration Files
//!
//! The loader supports three file formats, probed in priority order:
//! - `.lintforgerc.json` - dotfile config (JSON with comments and trailing
//!   commas accepted)
//! - `.lintforgerc.toml` - dotfile config (TOML)
//! - `lintforge.json` - plain project config
//!
//! ## Configuration Inheritance
//!
//! Configurations can extend other configurations using the `extends` field:
//!
//! ```jsonc
//! {
//!   "extends": ["../base.json"],
//!   "plugins": ["import"],
//!   "rules": {
//!     "no-unused-vars": ["error", { "args": "all" }]
//!   }
//! }
//! ```
//!
//! The extending file always wins ties; `extends` entries are resolved
//! relative to the file that declares them.

mod loader;
mod merge;

// Re-export main types
pub use loader::ConfigLoader;
pub use merge::{ConfigMerger, MergePolicy};
