//! CLI command implementations
//!
//! File I/O lives here, not in the core engines: a missing ignore file is
//! read as an empty document, and writes happen only when reconciliation
//! actually changed something.

use anyhow::Context;
use lintforge_core::{ConfigLoader, GITIGNORE_TEMPLATE, NPMIGNORE_TEMPLATE, reconcile};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

/// Reconcile an ignore file against its template.
///
/// In check mode nothing is written; an out-of-date file yields exit code 1.
pub fn ignore_sync(
    target: &Path,
    template: Option<&Path>,
    use_markers: bool,
    check: bool,
) -> anyhow::Result<ExitCode> {
    let existing = match fs::read_to_string(target) {
        Ok(text) => text,
        // a missing file is indistinguishable from an empty one at this layer
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", target.display()));
        }
    };

    let template_text = match template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?,
        None => builtin_template_for(target).to_string(),
    };

    debug!("Reconciling {}", target.display());
    let outcome = reconcile(&existing, &template_text, use_markers);

    if !outcome.changed {
        println!("{} is up to date", target.display());
        return Ok(ExitCode::SUCCESS);
    }
    if check {
        println!("{} is out of date", target.display());
        return Ok(ExitCode::FAILURE);
    }

    fs::write(target, outcome.text)
        .with_context(|| format!("failed to write {}", target.display()))?;
    println!("updated {}", target.display());
    Ok(ExitCode::SUCCESS)
}

/// Pick the built-in template matching the target file name.
fn builtin_template_for(target: &Path) -> &'static str {
    match target.file_name().and_then(|name| name.to_str()) {
        Some(".npmignore") => NPMIGNORE_TEMPLATE,
        _ => GITIGNORE_TEMPLATE,
    }
}

/// Print the merged configuration for a project as pretty JSON.
pub fn config_show(start_dir: &Path, config_path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let merged = ConfigLoader::load(config_path, Some(start_dir))?;
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(ExitCode::SUCCESS)
}
