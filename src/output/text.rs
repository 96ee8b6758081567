use std::path::Path;

use crate::fault::{Fault, FaultKind, Severity};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// Renders one fault as a `path:line:column: severity: message` line.
pub struct FaultFormatter {
    use_colors: bool,
}

impl FaultFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    #[must_use]
    pub fn format(&self, path: &Path, fault: &Fault, severity: Severity) -> String {
        let label = if severity == Severity::Warning {
            "warning"
        } else {
            "error"
        };
        let label = self.colorize(label, severity);
        format!(
            "{}:{}:{}: {label}: {}",
            path.display(),
            fault.line,
            fault.column,
            Self::message(&fault.kind)
        )
    }

    fn colorize(&self, text: &str, severity: Severity) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let color = if severity == Severity::Warning {
            ansi::YELLOW
        } else {
            ansi::RED
        };
        format!("{color}{text}{}", ansi::RESET)
    }

    fn message(kind: &FaultKind) -> String {
        match kind {
            FaultKind::LineTooLong(length) => {
                format!("line is too long ({length} characters)")
            }
            FaultKind::DuplicateImport(name) => {
                format!("duplicate import of \"{name}\"")
            }
            FaultKind::FileNamingMismatch {
                should_capitalize: true,
            } => "file contains top-level fields, so its name should be capitalized".to_string(),
            FaultKind::FileNamingMismatch {
                should_capitalize: false,
            } => "file has no top-level fields, so its name should not be capitalized".to_string(),
            FaultKind::BannedPhrase {
                phrase, comment, ..
            } => {
                format!("banned phrase \"{phrase}\" in comment \"{comment}\"")
            }
            FaultKind::ImproperlyFormatted => "file is not formatted canonically".to_string(),
            FaultKind::SyntaxError(error) => format!("syntax error: {}", error.message),
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
