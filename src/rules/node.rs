use std::collections::HashMap;

use crate::fault::{Fault, FaultAccumulator, FaultKind, Severity};
use crate::syntax::{Location, NodeTag};

use super::{FileContext, NodeRule};

/// Tracks `@import` targets within one file and flags every occurrence
/// after the first. Comparison is exact string equality of the import
/// argument.
#[derive(Default)]
pub struct DupeImport {
    first_seen: HashMap<String, Location>,
}

fn import_name(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

impl NodeRule for DupeImport {
    fn check_node(
        &mut self,
        ctx: &FileContext<'_>,
        node_index: usize,
        faults: &mut FaultAccumulator,
    ) {
        let node = ctx.tree.node(node_index);
        let NodeTag::ImportCall { target } = node.tag else {
            return;
        };

        let name = import_name(ctx.tree.token_slice(target));
        let location = ctx.tree.token_location(node.main_token);

        if self.first_seen.contains_key(name) {
            faults.add(Fault::new(
                location.line,
                location.column,
                FaultKind::DuplicateImport(name.to_string()),
            ));
        } else {
            self.first_seen.insert(name.to_string(), location);
        }
    }
}

/// Substring-searches every comment for the configured phrases. Matching is
/// byte-wise on the UTF-8 comment text (`str::find`), one fault per matching
/// phrase per comment at the first occurrence; faults are not deduplicated
/// across phrases.
pub struct BannedPhrases {
    error: Vec<String>,
    warn: Vec<String>,
}

impl BannedPhrases {
    #[must_use]
    pub const fn new(error: Vec<String>, warn: Vec<String>) -> Self {
        Self { error, warn }
    }

    fn check_list(
        phrases: &[String],
        severity: Severity,
        ctx: &FileContext<'_>,
        token_index: usize,
        faults: &mut FaultAccumulator,
    ) {
        let comment = ctx.tree.token_slice(token_index);
        let token_start = ctx.tree.tokens()[token_index].start;

        for phrase in phrases {
            if phrase.is_empty() {
                continue;
            }
            if let Some(offset) = comment.find(phrase.as_str()) {
                let location = ctx.tree.location_at(token_start + offset);
                faults.add(Fault::new(
                    location.line,
                    location.column,
                    FaultKind::BannedPhrase {
                        phrase: phrase.clone(),
                        comment: comment.to_string(),
                        severity,
                    },
                ));
            }
        }
    }
}

impl NodeRule for BannedPhrases {
    fn check_comment(
        &mut self,
        ctx: &FileContext<'_>,
        token_index: usize,
        faults: &mut FaultAccumulator,
    ) {
        Self::check_list(&self.error, Severity::Error, ctx, token_index, faults);
        Self::check_list(&self.warn, Severity::Warning, ctx, token_index, faults);
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
