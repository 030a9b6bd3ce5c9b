use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of patterns per selector list
const MAX_SELECTOR_PATTERNS: usize = 64;

/// Maximum length of a single selector pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ProjectSelector - Chooses which groups and projects a scan visits
///
/// Holds two independent pattern lists, one for group names and one for
/// project names. An empty list selects everything, so the default selector
/// scans the whole instance. Patterns support `*` to match zero or more
/// characters and are case-sensitive.
#[derive(Debug, Default)]
pub struct ProjectSelector {
    groups: Vec<NamePattern>,
    projects: Vec<NamePattern>,
}

impl ProjectSelector {
    /// Creates a selector from raw group and project patterns
    ///
    /// # Errors
    /// - Too many patterns in either list (> MAX_SELECTOR_PATTERNS)
    /// - Empty, over-long, wildcard-only or control-character patterns
    pub fn new(group_patterns: Vec<String>, project_patterns: Vec<String>) -> Result<Self> {
        Ok(Self {
            groups: compile_patterns(group_patterns, "group")?,
            projects: compile_patterns(project_patterns, "project")?,
        })
    }

    /// Selector that visits every group and project
    pub fn all() -> Self {
        Self::default()
    }

    pub fn selects_group(&self, group_name: &str) -> bool {
        matches_any(&self.groups, group_name)
    }

    pub fn selects_project(&self, project_name: &str) -> bool {
        matches_any(&self.projects, project_name)
    }

    /// Patterns that never matched a name during the scan
    ///
    /// Should be called after the traversal; returns `(kind, pattern)` pairs
    /// where kind is `"group"` or `"project"`.
    pub fn unmatched_patterns(&self) -> Vec<(&'static str, String)> {
        let groups = self
            .groups
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| ("group", p.original.clone()));
        let projects = self
            .projects
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| ("project", p.original.clone()));

        groups.chain(projects).collect()
    }
}

fn compile_patterns(patterns: Vec<String>, kind: &str) -> Result<Vec<NamePattern>> {
    if patterns.len() > MAX_SELECTOR_PATTERNS {
        anyhow::bail!(
            "Too many {} patterns: {} (maximum: {})",
            kind,
            patterns.len(),
            MAX_SELECTOR_PATTERNS
        );
    }

    patterns
        .into_iter()
        .map(|pattern| NamePattern::new(pattern, kind))
        .collect()
}

/// Any match marks every matching pattern; an empty list matches everything
fn matches_any(patterns: &[NamePattern], name: &str) -> bool {
    if patterns.is_empty() {
        return true;
    }
    patterns
        .iter()
        .fold(false, |found, pattern| pattern.matches(name) || found)
}

/// A single name pattern with its compiled matcher
#[derive(Debug)]
struct NamePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl NamePattern {
    fn new(pattern: String, kind: &str) -> Result<Self> {
        validate_pattern(&pattern, kind)?;
        let matcher = PatternMatcher::compile(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.matcher.matches(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "billing"
    Exact(String),
    /// "*-service"
    EndsWith(String),
    /// "legacy-*"
    StartsWith(String),
    /// "*api*"
    Contains(String),
    /// "core*svc*v2" - anchored at both ends unless the pattern starts/ends with '*'
    Parts {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn compile(pattern: &str) -> Self {
        let wildcard_count = pattern.matches('*').count();
        let starts = pattern.starts_with('*');
        let ends = pattern.ends_with('*');

        match (wildcard_count, starts, ends) {
            (0, _, _) => PatternMatcher::Exact(pattern.to_string()),
            (1, true, false) => PatternMatcher::EndsWith(pattern[1..].to_string()),
            (1, false, true) => PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string()),
            (2, true, true) if !pattern[1..pattern.len() - 1].contains('*') => {
                PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string())
            }
            _ => PatternMatcher::Parts {
                parts: pattern
                    .split('*')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
                anchored_start: !starts,
                anchored_end: !ends,
            },
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => name == s,
            PatternMatcher::EndsWith(suffix) => name.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => name.contains(middle.as_str()),
            PatternMatcher::Parts {
                parts,
                anchored_start,
                anchored_end,
            } => match_parts(name, parts, *anchored_start, *anchored_end),
        }
    }
}

fn match_parts(name: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
        return true;
    };

    if anchored_start && !name.starts_with(first.as_str()) {
        return false;
    }
    if anchored_end && !name.ends_with(last.as_str()) {
        return false;
    }

    // Parts must appear in order without overlapping
    let mut current_pos = 0;
    for part in parts {
        match name[current_pos..].find(part.as_str()) {
            Some(pos) => current_pos += pos + part.len(),
            None => return false,
        }
    }
    true
}

fn validate_pattern(pattern: &str, kind: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        anyhow::bail!("{} pattern cannot be empty", capitalize(kind));
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "{} pattern is too long: '{}' ({} chars). Maximum: {} chars",
            capitalize(kind),
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| c.is_control()) {
        anyhow::bail!(
            "{} pattern contains control character {:?} in pattern '{}'",
            capitalize(kind),
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "{} pattern cannot contain only wildcards: '{}'. Omit the pattern to select every {}.",
            capitalize(kind),
            pattern,
            kind
        );
    }

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
