//! Lintforge Core
//!
//! Configuration-merging and ignore-file scaffolding engine for lint tooling.
//! This crate provides the components for combining partial lint
//! configuration fragments into one consistent configuration object, and for
//! reconciling on-disk ignore files against canonical templates without
//! clobbering user customizations.

pub mod config;
pub mod error;
pub mod scaffold;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigMerger, MergePolicy};
pub use error::{ErrorKind, LintforgeError, Result};
pub use scaffold::{
    GITIGNORE_TEMPLATE, IgnoreList, Markers, NPMIGNORE_TEMPLATE, Reconciled, reconcile,
};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintforge=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
