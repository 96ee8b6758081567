use serde::Deserialize;

use crate::fault::{FaultKind, Severity};

/// Line-length rule settings. A limit of 0 disables the rule regardless of
/// severity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LineLengthConfig {
    pub limit: usize,
    pub severity: Severity,
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            severity: Severity::Error,
        }
    }
}

/// Banned comment phrases, partitioned by the severity their matches carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BannedPhrases {
    pub warn: Vec<String>,
    pub error: Vec<String>,
}

impl BannedPhrases {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warn.is_empty() && self.error.is_empty()
    }
}

/// Per-run rule settings, immutable after construction and shared by
/// reference across all worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfiguration {
    pub max_line_length: LineLengthConfig,
    pub check_format: Severity,
    pub dupe_import: Severity,
    pub file_as_struct: Severity,
    pub banned_comment_phrases: BannedPhrases,
}

impl Default for RuleConfiguration {
    fn default() -> Self {
        Self {
            max_line_length: LineLengthConfig::default(),
            check_format: Severity::Error,
            dupe_import: Severity::Error,
            file_as_struct: Severity::Error,
            banned_comment_phrases: BannedPhrases::default(),
        }
    }
}

impl RuleConfiguration {
    /// Classify a fault against the severity configured for its rule.
    /// `BannedPhrase` faults carry the severity of the list they matched.
    #[must_use]
    pub fn severity_for(&self, kind: &FaultKind) -> Severity {
        match kind {
            FaultKind::LineTooLong(_) => self.max_line_length.severity,
            FaultKind::DuplicateImport(_) => self.dupe_import,
            FaultKind::FileNamingMismatch { .. } => self.file_as_struct,
            FaultKind::BannedPhrase { severity, .. } => *severity,
            FaultKind::ImproperlyFormatted | FaultKind::SyntaxError(_) => self.check_format,
        }
    }
}

/// On-disk shape of `ziglint.json`. Unknown fields and invalid severity
/// strings are rejected at parse time with messages listing the valid
/// alternatives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConfigFile {
    pub max_line_length: LineLengthConfig,
    pub check_format: Severity,
    pub dupe_import: Severity,
    pub file_as_struct: Severity,
    pub banned_comment_phrases: BannedPhrases,
    pub exclude: Vec<String>,
    pub include: Vec<String>,
}

impl ConfigFile {
    #[must_use]
    pub fn rule_configuration(&self) -> RuleConfiguration {
        RuleConfiguration {
            max_line_length: self.max_line_length.clone(),
            check_format: self.check_format,
            dupe_import: self.dupe_import,
            file_as_struct: self.file_as_struct,
            banned_comment_phrases: self.banned_comment_phrases.clone(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
