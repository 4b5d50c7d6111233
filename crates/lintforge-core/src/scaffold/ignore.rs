//! Ignore-file parsing, merging, and serialization
//!
//! This module provides [`IgnoreList`], a structured parse of
//! gitignore-style text. A document is an ordered sequence of sections, each
//! grouping a contiguous comment/blank header with the pattern lines that
//! follow it. A pair of sentinel marker lines delimits the managed region:
//! content previously written by this tool and the only place where a merge
//! inserts new sections (for files without markers, merged sections are
//! appended at the end instead).
//!
//! Merging is set-based: patterns already present anywhere in the target, or
//! present in commented-out form (`#pattern`), are never added again, which
//! makes reconciliation against a template idempotent.
//!
//! Lifecycle: parse (or start empty), merge one template in, serialize with
//! [`IgnoreList::to_string_array`] or `to_string()`.

use std::collections::HashSet;
use std::fmt;

/// Sentinel comment lines delimiting the managed region of an ignore file.
///
/// These are part of the on-disk contract: each must appear verbatim, alone
/// on its own line, for round-tripping across repeated runs to stay
/// idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub begin: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            begin: "# <managed-tool-region>".to_string(),
            end: "# </managed-tool-region>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    /// A comment/blank header followed by pattern lines.
    Content,
    BeginMarker,
    EndMarker,
}

/// A contiguous comment block and the pattern lines that follow it, the unit
/// of granularity for merge-time deduplication and placement.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    kind: SectionKind,
    header: Vec<String>,
    body: Vec<String>,
}

impl Section {
    fn content() -> Self {
        Self {
            kind: SectionKind::Content,
            header: Vec::new(),
            body: Vec::new(),
        }
    }

    fn marker(kind: SectionKind, line: &str) -> Self {
        Self {
            kind,
            header: vec![line.to_string()],
            body: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

/// A parsed ignore-pattern document.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    markers: Markers,
    /// Every live pattern seen anywhere in the document.
    patterns: HashSet<String>,
    /// Patterns present in commented-out form (`#pattern`). A merge must
    /// never resurrect these as active patterns.
    commented_patterns: HashSet<String>,
    sections: Vec<Section>,
    changed: bool,
}

impl IgnoreList {
    /// Create an empty document with the default markers.
    pub fn new() -> Self {
        Self::with_markers(Markers::default())
    }

    /// Create an empty document with custom markers.
    pub fn with_markers(markers: Markers) -> Self {
        Self {
            markers,
            patterns: HashSet::new(),
            commented_patterns: HashSet::new(),
            sections: Vec::new(),
            changed: false,
        }
    }

    /// Parse ignore-file text with the default markers.
    ///
    /// Never fails: empty or malformed text parses as an empty document.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_markers(text, Markers::default())
    }

    /// Parse ignore-file text with custom markers.
    pub fn parse_with_markers(text: &str, markers: Markers) -> Self {
        let mut list = Self::with_markers(markers);
        list.scan(text);
        list
    }

    /// True once `merge` has structurally altered `sections`.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// True if the given pattern is live anywhere in the document.
    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    /// True if the document has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn scan(&mut self, text: &str) {
        let mut current = Section::content();

        for raw in text.lines() {
            let line = raw.trim();

            if line == self.markers.begin {
                self.flush(&mut current);
                if !self.has_marker(SectionKind::BeginMarker) {
                    self.sections
                        .push(Section::marker(SectionKind::BeginMarker, line));
                }
            } else if line == self.markers.end {
                self.flush(&mut current);
                if !self.has_marker(SectionKind::EndMarker) {
                    self.sections
                        .push(Section::marker(SectionKind::EndMarker, line));
                }
            } else if line.is_empty() || Self::is_header_comment(line, &current) {
                self.flush_body(&mut current);
                current.header.push(line.to_string());
            } else if line.starts_with('#') {
                // A commented-out pattern: intentionally disabled. The line
                // stays in the document, and the stripped pattern is recorded
                // so a later merge cannot resurrect it.
                let pattern = line.trim_start_matches('#').trim();
                if !pattern.is_empty() && !self.commented_patterns.contains(pattern) {
                    self.commented_patterns.insert(pattern.to_string());
                    current.body.push(line.to_string());
                }
            } else if !self.patterns.contains(line) && !self.commented_patterns.contains(line) {
                self.patterns.insert(line.to_string());
                current.body.push(line.to_string());
            }
        }

        // trailing comments with no body are dropped
        self.flush_body(&mut current);
    }

    /// Header heuristic: a comment line belongs to a section header if it is
    /// a bare `#`, has a space after the `#`, or opens a still-empty section.
    /// Any other `#token` line is a commented-out pattern candidate.
    fn is_header_comment(line: &str, current: &Section) -> bool {
        if !line.starts_with('#') {
            return false;
        }
        line == "#" || line[1..].starts_with(' ') || current.is_empty()
    }

    fn has_marker(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|section| section.kind == kind)
    }

    /// Push the in-progress section if it holds anything at all.
    fn flush(&mut self, current: &mut Section) {
        if !current.is_empty() {
            self.sections
                .push(std::mem::replace(current, Section::content()));
        }
    }

    /// Push the in-progress section only once it has pattern lines; a
    /// body-less section keeps accumulating header lines.
    fn flush_body(&mut self, current: &mut Section) {
        if !current.body.is_empty() {
            self.sections
                .push(std::mem::replace(current, Section::content()));
        }
    }

    /// Number of leading pure-comment sections. New begin markers are
    /// inserted after this preamble.
    fn preamble_len(&self) -> usize {
        self.sections
            .iter()
            .take_while(|section| section.kind == SectionKind::Content && section.body.is_empty())
            .count()
    }

    /// Merge `source` into `self`, adding only patterns not already present
    /// (live or commented-out) in this document.
    ///
    /// With `use_markers`, new sections are spliced into the managed region,
    /// creating or reusing the marker pair so exactly one of each remains.
    /// Without markers, new sections are appended at the very end. A merge
    /// that stages nothing leaves `sections` untouched and `changed` false.
    pub fn merge(&mut self, source: &IgnoreList, use_markers: bool) {
        let mut staged: Vec<Section> = Vec::new();

        for section in &source.sections {
            if section.kind != SectionKind::Content {
                continue;
            }
            let mut survivors: Vec<String> = Vec::new();
            for line in &section.body {
                if let Some(stripped) = line.strip_prefix('#') {
                    // commented-out pattern line from the source
                    let pattern = stripped.trim_start_matches('#').trim();
                    if !self.commented_patterns.contains(pattern) {
                        self.commented_patterns.insert(pattern.to_string());
                        survivors.push(line.clone());
                    }
                } else if !self.patterns.contains(line)
                    && !self.commented_patterns.contains(line)
                {
                    self.patterns.insert(line.clone());
                    survivors.push(line.clone());
                }
            }
            if survivors.is_empty() {
                continue;
            }
            staged.push(Section {
                kind: SectionKind::Content,
                header: section.header.clone(),
                body: survivors,
            });
        }

        if staged.is_empty() {
            return;
        }
        self.changed = true;

        if !use_markers {
            self.sections.append(&mut staged);
            return;
        }

        let begin_index = match self
            .sections
            .iter()
            .position(|section| section.kind == SectionKind::BeginMarker)
        {
            Some(index) => index,
            None => {
                let index = self.preamble_len();
                let line = self.markers.begin.clone();
                self.sections
                    .insert(index, Section::marker(SectionKind::BeginMarker, &line));
                index
            }
        };

        // Reuse the position of an existing end marker, never duplicate it.
        let mut insert_at = begin_index + 1;
        if let Some(end_index) = self
            .sections
            .iter()
            .position(|section| section.kind == SectionKind::EndMarker)
        {
            self.sections.remove(end_index);
            insert_at = if end_index > begin_index {
                end_index
            } else {
                // end marker preceded the begin marker; removing it shifted
                // the begin marker down by one
                begin_index
            };
        }

        let end_line = self.markers.end.clone();
        staged.push(Section::marker(SectionKind::EndMarker, &end_line));
        for section in staged.into_iter().rev() {
            self.sections.insert(insert_at, section);
        }
    }

    /// Serialize to lines: sections in order, blank runs at boundaries
    /// collapsed to exactly one blank line, no trailing blank.
    pub fn to_string_array(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for section in &self.sections {
            if lines.last().is_some_and(|last| !last.is_empty()) {
                lines.push(String::new());
            }
            for line in section.header.iter().chain(section.body.iter()) {
                if line.is_empty() && lines.last().is_none_or(String::is_empty) {
                    continue;
                }
                lines.push(line.clone());
            }
        }

        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins the serialized lines with newlines and exactly one trailing
/// newline. An empty document renders as the empty string rather than a
/// lone newline, so a fresh target never starts with a phantom blank line.
impl fmt::Display for IgnoreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_string_array() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
