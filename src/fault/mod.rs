mod accumulator;

pub use accumulator::FaultAccumulator;

use serde::{Deserialize, Serialize};

use crate::syntax::ParseError;

/// How a rule's findings affect the run.
///
/// `Warning` faults are printed but excluded from the error count that
/// determines the process exit code. `Disabled` rules are never evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Disabled,
}

impl Severity {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// A single detected rule violation.
///
/// Immutable once created; owned by the per-file `FaultAccumulator` until
/// drained for printing. Lines and columns are 1-based, except whole-file
/// faults which report `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub line: usize,
    pub column: usize,
    pub kind: FaultKind,
}

impl Fault {
    #[must_use]
    pub const fn new(line: usize, column: usize, kind: FaultKind) -> Self {
        Self { line, column, kind }
    }
}

/// Classified detail for each kind of violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultKind {
    /// Payload is the actual line length in Unicode code points.
    LineTooLong(usize),
    /// Payload is the import argument string of the first occurrence.
    DuplicateImport(String),
    FileNamingMismatch {
        should_capitalize: bool,
    },
    BannedPhrase {
        phrase: String,
        comment: String,
        severity: Severity,
    },
    ImproperlyFormatted,
    SyntaxError(ParseError),
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
