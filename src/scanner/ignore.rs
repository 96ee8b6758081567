use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One glob pattern in the ignore-file convention.
///
/// A leading `/` anchors the pattern to the traversal root; otherwise it may
/// match starting at any path component. `**` matches zero or more whole
/// segments. Within a segment, `*` consumes a maximal run bounded by the
/// next literal character and `?` matches exactly one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    anchored: bool,
    segments: Vec<String>,
}

impl GlobPattern {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let anchored = pattern.starts_with('/');
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Self { anchored, segments }
    }

    #[must_use]
    pub fn matches(&self, relative: &Path) -> bool {
        let components: Vec<&str> = relative
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect();

        if self.segments.is_empty() {
            return false;
        }
        if self.anchored {
            return Self::match_from(&self.segments, &components);
        }
        (0..=components.len()).any(|start| Self::match_from(&self.segments, &components[start..]))
    }

    /// Match pattern segments against path components. Remaining path
    /// components after the pattern is exhausted are allowed, so a directory
    /// pattern covers everything beneath it.
    fn match_from(pattern: &[String], components: &[&str]) -> bool {
        let mut pi = 0;
        let mut ci = 0;
        while pi < pattern.len() {
            if pattern[pi] == "**" {
                // terminal ** matches whatever remains
                if pi + 1 == pattern.len() {
                    return true;
                }
                // resume at the first component matching the next segment
                let next = &pattern[pi + 1];
                while ci < components.len() && !Self::segment_matches(next, components[ci]) {
                    ci += 1;
                }
                if ci == components.len() {
                    return false;
                }
                pi += 1;
                continue;
            }
            if ci == components.len() {
                return false;
            }
            if !Self::segment_matches(&pattern[pi], components[ci]) {
                return false;
            }
            pi += 1;
            ci += 1;
        }
        true
    }

    fn segment_matches(pattern: &str, segment: &str) -> bool {
        let pat: Vec<char> = pattern.chars().collect();
        let seg: Vec<char> = segment.chars().collect();
        let mut pi = 0;
        let mut si = 0;
        while pi < pat.len() {
            match pat[pi] {
                '*' => {
                    // trailing * consumes the rest of the segment
                    if pi + 1 == pat.len() {
                        return true;
                    }
                    let bound = pat[pi + 1];
                    if bound == '?' {
                        // no literal to stop at; * consumes nothing
                        pi += 1;
                        continue;
                    }
                    while si < seg.len() && seg[si] != bound {
                        si += 1;
                    }
                    if si == seg.len() {
                        return false;
                    }
                    pi += 1;
                }
                '?' => {
                    if si == seg.len() {
                        return false;
                    }
                    pi += 1;
                    si += 1;
                }
                literal => {
                    if si == seg.len() || seg[si] != literal {
                        return false;
                    }
                    pi += 1;
                    si += 1;
                }
            }
        }
        si == seg.len()
    }
}

/// Answers "is this path excluded from analysis?" for one top-level
/// argument. Includes always win over excludes, regardless of which source
/// (command line, config file, ignore file) registered them or in which
/// order. Read-only once traversal starts.
#[derive(Debug, Default)]
pub struct IgnoreTracker {
    base: PathBuf,
    excludes: Vec<GlobPattern>,
    includes: Vec<GlobPattern>,
}

impl IgnoreTracker {
    #[must_use]
    pub fn new(base: PathBuf) -> Self {
        Self {
            base,
            excludes: Vec::new(),
            includes: Vec::new(),
        }
    }

    pub fn add_exclude(&mut self, pattern: &str) {
        self.excludes.push(GlobPattern::new(pattern));
    }

    pub fn add_include(&mut self, pattern: &str) {
        self.includes.push(GlobPattern::new(pattern));
    }

    /// Register one raw ignore-file line: blank lines and `#` comments are
    /// skipped, a leading `!` registers an include.
    pub fn add_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        if let Some(rest) = line.strip_prefix('!') {
            self.add_include(rest);
        } else {
            self.add_exclude(line);
        }
    }

    /// Load a discovered ignore file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_ignore_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            self.add_line(line);
        }
        Ok(())
    }

    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.base).unwrap_or(path);
        if self.includes.iter().any(|p| p.matches(relative)) {
            return false;
        }
        self.excludes.iter().any(|p| p.matches(relative))
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
