//! Idempotent reconciliation of ignore files against canonical templates
//!
//! The scaffolding half of the toolkit: parse an on-disk ignore file and a
//! template of the same format, merge the template in without clobbering
//! user sections, and serialize back to canonical text. Running the same
//! reconciliation twice produces byte-identical output and reports no
//! change the second time, so callers can use [`Reconciled::changed`] to
//! decide whether a write is needed at all.

mod ignore;
mod templates;

// Re-export main types
pub use ignore::{IgnoreList, Markers};
pub use templates::{GITIGNORE_TEMPLATE, NPMIGNORE_TEMPLATE};

/// Outcome of reconciling ignore-file text against a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    /// Canonical serialized text to write back.
    pub text: String,
    /// True if the merge structurally altered the document.
    pub changed: bool,
}

/// Reconcile `existing` ignore-file text against `template` text.
///
/// Missing-file callers pass an empty string; an empty document is never an
/// error at this layer. With `use_markers`, template sections are kept
/// inside the managed marker region; otherwise they are appended at the end.
pub fn reconcile(existing: &str, template: &str, use_markers: bool) -> Reconciled {
    let mut target = IgnoreList::parse(existing);
    let source = IgnoreList::parse(template);
    target.merge(&source, use_markers);
    tracing::debug!(changed = target.changed(), "reconciled ignore file");
    Reconciled {
        text: target.to_string(),
        changed: target.changed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_from_nothing_creates_managed_region() {
        let outcome = reconcile("", GITIGNORE_TEMPLATE, true);
        assert!(outcome.changed);
        assert!(outcome.text.contains("# <managed-tool-region>"));
        assert!(outcome.text.contains("node_modules/"));
        assert!(outcome.text.ends_with('\n'));
    }

    #[test]
    fn test_reconcile_twice_is_byte_identical() {
        let first = reconcile("logs/\n# Custom\nsecret.txt\n", GITIGNORE_TEMPLATE, true);
        assert!(first.changed);

        let second = reconcile(&first.text, GITIGNORE_TEMPLATE, true);
        assert!(!second.changed);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn test_reconcile_preserves_user_sections() {
        let outcome = reconcile("# Custom\nsecret.txt\n", GITIGNORE_TEMPLATE, true);
        assert!(outcome.text.contains("# Custom"));
        assert!(outcome.text.contains("secret.txt"));
    }
}
