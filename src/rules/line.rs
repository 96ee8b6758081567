use crate::fault::{Fault, FaultAccumulator, FaultKind};

use super::{LineInfo, LineRule};

/// Flags lines longer than the configured limit, counted in Unicode code
/// points. The reported column is the limit itself.
pub struct MaxLineLength {
    limit: usize,
}

impl MaxLineLength {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// A comment consisting solely of a bare URL is exempt: wrapping it
    /// would break the link.
    fn is_bare_url_comment(trimmed: &str) -> bool {
        let Some(rest) = trimmed.strip_prefix("// ") else {
            return false;
        };
        (rest.starts_with("http://") || rest.starts_with("https://"))
            && !rest.contains(char::is_whitespace)
    }

    /// Length relevant for the check: multiline-string lines measure only
    /// the payload after the `\\` marker, since indentation before the
    /// marker does not reach the rendered string.
    fn effective_length(line: &LineInfo<'_>) -> Option<usize> {
        let trimmed = line.text.trim_start();
        if let Some(payload) = trimmed.strip_prefix("\\\\") {
            return Some(payload.chars().count());
        }
        if Self::is_bare_url_comment(trimmed.trim_end()) {
            return None;
        }
        Some(line.text.chars().count())
    }
}

impl LineRule for MaxLineLength {
    fn check_line(&self, line: &LineInfo<'_>, faults: &mut FaultAccumulator) {
        let Some(length) = Self::effective_length(line) else {
            return;
        };
        if length > self.limit {
            faults.add(Fault::new(
                line.number,
                self.limit,
                FaultKind::LineTooLong(length),
            ));
        }
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
