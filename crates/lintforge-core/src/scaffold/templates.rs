//! Canonical ignore-file templates consumed by the scaffolding commands.
//!
//! Each template is ordinary ignore-file text: section comments followed by
//! patterns. The reconciliation engine deduplicates against whatever the
//! user already has, so templates stay additive.

/// Canonical `.gitignore` template.
pub const GITIGNORE_TEMPLATE: &str = "\
# Dependencies
node_modules/

# Build output
dist/
build/
out/

# Coverage reports
coverage/
.nyc_output/

# Logs
*.log
npm-debug.log*

# Editor and OS artifacts
.DS_Store
.idea/
.vscode/
";

/// Canonical `.npmignore` template.
pub const NPMIGNORE_TEMPLATE: &str = "\
# Sources and tooling not shipped in the package
src/
test/
coverage/
.editorconfig

# CI and lint configuration
.github/
.lintforgerc.json
.lintforgerc.toml
lintforge.json

# Logs
*.log
";
