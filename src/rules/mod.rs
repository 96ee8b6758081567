mod line;
mod node;
mod tree;

pub use line::MaxLineLength;
pub use node::{BannedPhrases, DupeImport};
pub use tree::{CheckFormat, FileAsStruct};

use crate::config::RuleConfiguration;
use crate::fault::FaultAccumulator;
use crate::syntax::Tree;

/// Everything a rule can see about the file under analysis.
pub struct FileContext<'a> {
    /// Base name of the file, no directory components.
    pub file_name: &'a str,
    pub source: &'a str,
    pub tree: &'a Tree<'a>,
}

/// One physical line of raw source, as produced by the analyzer's single
/// left-to-right scan. `text` excludes the line terminator.
pub struct LineInfo<'a> {
    pub number: usize,
    pub text: &'a str,
    /// Byte offset within `text` where a `//` comment begins, if any.
    pub comment_offset: Option<usize>,
    /// Whether non-whitespace content precedes the comment.
    pub has_code: bool,
}

/// Evaluated once per physical line.
pub trait LineRule {
    fn check_line(&self, line: &LineInfo<'_>, faults: &mut FaultAccumulator);
}

/// Evaluated once per syntax-tree node and once per comment token. Rules may
/// keep per-file state (reset by constructing a fresh `RuleSet` per file).
pub trait NodeRule {
    fn check_node(
        &mut self,
        ctx: &FileContext<'_>,
        node_index: usize,
        faults: &mut FaultAccumulator,
    ) {
        let _ = (ctx, node_index, faults);
    }

    fn check_comment(
        &mut self,
        ctx: &FileContext<'_>,
        token_index: usize,
        faults: &mut FaultAccumulator,
    ) {
        let _ = (ctx, token_index, faults);
    }
}

/// Evaluated once per fully parsed tree.
pub trait TreeRule {
    fn check_tree(&self, ctx: &FileContext<'_>, faults: &mut FaultAccumulator);
}

/// The fixed, ordered rule set for one file's analysis. Rules configured as
/// `Disabled` are not constructed at all.
pub struct RuleSet {
    pub line_rules: Vec<Box<dyn LineRule>>,
    pub node_rules: Vec<Box<dyn NodeRule>>,
    pub tree_rules: Vec<Box<dyn TreeRule>>,
}

impl RuleSet {
    #[must_use]
    pub fn from_config(config: &RuleConfiguration) -> Self {
        let mut line_rules: Vec<Box<dyn LineRule>> = Vec::new();
        if config.max_line_length.severity.is_enabled() && config.max_line_length.limit > 0 {
            line_rules.push(Box::new(MaxLineLength::new(config.max_line_length.limit)));
        }

        let mut node_rules: Vec<Box<dyn NodeRule>> = Vec::new();
        if config.dupe_import.is_enabled() {
            node_rules.push(Box::new(DupeImport::default()));
        }
        if !config.banned_comment_phrases.is_empty() {
            node_rules.push(Box::new(BannedPhrases::new(
                config.banned_comment_phrases.error.clone(),
                config.banned_comment_phrases.warn.clone(),
            )));
        }

        let mut tree_rules: Vec<Box<dyn TreeRule>> = Vec::new();
        if config.check_format.is_enabled() {
            tree_rules.push(Box::new(CheckFormat));
        }
        if config.file_as_struct.is_enabled() {
            tree_rules.push(Box::new(FileAsStruct));
        }

        Self {
            line_rules,
            node_rules,
            tree_rules,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
