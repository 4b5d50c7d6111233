//! End-to-end properties of ignore-file reconciliation
//!
//! Covers the round-trip guarantees the scaffolding commands rely on:
//! idempotence, deduplication, marker stability, and preservation of user
//! content.

use lintforge_core::{GITIGNORE_TEMPLATE, IgnoreList, reconcile};

const BEGIN: &str = "# <managed-tool-region>";
const END: &str = "# </managed-tool-region>";

#[test]
fn reconciling_twice_is_idempotent() {
    let user_file = "\
# Local secrets
.env
secret.pem

logs/
";
    let first = reconcile(user_file, GITIGNORE_TEMPLATE, true);
    assert!(first.changed);

    let second = reconcile(&first.text, GITIGNORE_TEMPLATE, true);
    assert!(!second.changed);
    assert_eq!(second.text, first.text);
}

#[test]
fn double_merge_on_one_instance_reports_no_change() {
    let mut target = IgnoreList::parse("logs/\n");
    let template = IgnoreList::parse(GITIGNORE_TEMPLATE);

    target.merge(&template, true);
    assert!(target.changed());
    let after_first = target.to_string();

    let mut target = IgnoreList::parse(&after_first);
    target.merge(&template, true);
    assert!(!target.changed());
    assert_eq!(target.to_string(), after_first);
}

#[test]
fn merged_output_contains_each_pattern_at_most_once() {
    let user_file = "node_modules/\ndist/\n*.log\n";
    let outcome = reconcile(user_file, GITIGNORE_TEMPLATE, true);

    let list = IgnoreList::parse(&outcome.text);
    let lines = list.to_string_array();
    for pattern in ["node_modules/", "dist/", "*.log", "coverage/"] {
        let occurrences = lines.iter().filter(|line| *line == pattern).count();
        assert_eq!(occurrences, 1, "pattern {pattern} duplicated");
    }
}

#[test]
fn commented_out_patterns_are_not_resurrected() {
    let user_file = "# Build\ndist/\n#coverage/\n";
    let outcome = reconcile(user_file, GITIGNORE_TEMPLATE, true);

    let active: Vec<&str> = outcome
        .text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect();
    assert!(!active.contains(&"coverage/"));
    // unrelated template patterns still arrive
    assert!(active.contains(&"node_modules/"));
}

#[test]
fn commented_patterns_survive_repeated_runs_on_disk() {
    // a disabled pattern must stay disabled across write/re-read cycles,
    // even when the template carries the active form
    let user_file = "# Build\ndist/\n#coverage/\n";
    let first = reconcile(user_file, GITIGNORE_TEMPLATE, true);
    assert!(first.changed);
    assert!(first.text.contains("#coverage/"));
    assert!(!first.text.lines().any(|line| line == "coverage/"));

    let second = reconcile(&first.text, GITIGNORE_TEMPLATE, true);
    assert!(!second.changed);
    assert_eq!(second.text, first.text);
    assert!(!second.text.lines().any(|line| line == "coverage/"));
}

#[test]
fn sequential_merges_keep_exactly_one_marker_pair() {
    let mut target = IgnoreList::parse("logs/\n");
    target.merge(&IgnoreList::parse("# Build\ndist/\n"), true);
    target.merge(&IgnoreList::parse("# Python\n__pycache__/\n"), true);

    let text = target.to_string();
    assert_eq!(text.lines().filter(|line| *line == BEGIN).count(), 1);
    assert_eq!(text.lines().filter(|line| *line == END).count(), 1);
}

#[test]
fn merge_without_markers_appends_at_the_end() {
    let outcome = reconcile("logs/\n", "# Build\ndist/\n", false);
    assert!(outcome.changed);
    assert_eq!(outcome.text, "logs/\n\n# Build\ndist/\n");
    assert!(!outcome.text.contains(BEGIN));
}

#[test]
fn user_sections_survive_with_their_headers() {
    let user_file = "\
# Tooling caches
.cache/
.turbo/

logs/
";
    let outcome = reconcile(user_file, GITIGNORE_TEMPLATE, true);
    assert!(outcome.text.contains("# Tooling caches"));
    assert!(outcome.text.contains(".cache/"));
    assert!(outcome.text.contains("logs/"));
}

#[test]
fn empty_input_scaffolds_a_fresh_file() {
    let outcome = reconcile("", GITIGNORE_TEMPLATE, true);
    assert!(outcome.changed);
    assert!(outcome.text.starts_with(BEGIN));
    assert!(outcome.text.trim_end().ends_with(END));
    assert!(outcome.text.ends_with('\n'));
}

#[test]
fn template_section_order_is_preserved() {
    let outcome = reconcile("", GITIGNORE_TEMPLATE, true);
    let deps = outcome.text.find("node_modules/").unwrap();
    let build = outcome.text.find("dist/").unwrap();
    let coverage = outcome.text.find("coverage/").unwrap();
    assert!(deps < build && build < coverage);
}
