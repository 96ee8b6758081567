//! Per-file orchestration: one pass over raw bytes for line rules and
//! suppression directives, one pass over nodes and comment tokens, one pass
//! over the whole tree, then a sorted, suppression-filtered fault list.

use crate::config::RuleConfiguration;
use crate::fault::{Fault, FaultAccumulator};
use crate::rules::{FileContext, LineInfo, LineRule, RuleSet};
use crate::syntax::{TokenKind, Tree};

/// The in-source marker that suppresses faults on one line. Trailing
/// (after code) it covers its own line; standalone it covers the next.
const SUPPRESS_DIRECTIVE: &str = "ziglint: ignore";

pub struct Analyzer<'a> {
    config: &'a RuleConfiguration,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub const fn new(config: &'a RuleConfiguration) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn analyze(&self, file_name: &str, source: &str, tree: &Tree<'_>) -> Vec<Fault> {
        let mut rules = RuleSet::from_config(self.config);
        let mut faults = FaultAccumulator::new();

        scan_lines(source, &rules.line_rules, &mut faults);

        let ctx = FileContext {
            file_name,
            source,
            tree,
        };

        for node_index in 0..tree.node_count() {
            for rule in &mut rules.node_rules {
                rule.check_node(&ctx, node_index, &mut faults);
            }
        }

        for (token_index, token) in tree.tokens().iter().enumerate() {
            if token.kind == TokenKind::Comment {
                for rule in &mut rules.node_rules {
                    rule.check_comment(&ctx, token_index, &mut faults);
                }
            }
        }

        for rule in &rules.tree_rules {
            rule.check_tree(&ctx, &mut faults);
        }

        faults.drain_sorted()
    }
}

/// Single left-to-right pass over the raw bytes. Tracks the current line
/// start, whether a `//` comment has begun (string- and char-literal
/// aware), and
/// whether the line has content before the comment, so that line rules and
/// suppression detection observe identical line boundaries.
fn scan_lines(source: &str, rules: &[Box<dyn LineRule>], faults: &mut FaultAccumulator) {
    let bytes = source.as_bytes();
    let mut line_number = 1usize;
    let mut line_start = 0usize;
    let mut comment_start: Option<usize> = None;
    let mut has_code = false;
    let mut in_string = false;
    let mut in_char = false;

    let mut i = 0usize;
    loop {
        let at_end = i == bytes.len();
        let byte = if at_end { b'\n' } else { bytes[i] };
        let is_boundary = at_end || byte == b'\n' || byte == b'\r';

        if is_boundary {
            // a trailing newline does not start another line
            if at_end && i == line_start && line_number > 1 {
                break;
            }
            let text = &source[line_start..i];
            let info = LineInfo {
                number: line_number,
                text,
                comment_offset: comment_start.map(|c| c - line_start),
                has_code,
            };
            for rule in rules {
                rule.check_line(&info, faults);
            }
            apply_suppression(&info, faults);

            if at_end {
                break;
            }
            // CRLF consumes two bytes, lone CR or LF one
            i += if byte == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                2
            } else {
                1
            };
            line_number += 1;
            line_start = i;
            comment_start = None;
            has_code = false;
            in_string = false;
            in_char = false;
            continue;
        }

        if comment_start.is_none() {
            match byte {
                b'"' if !in_char => {
                    in_string = !in_string;
                    has_code = true;
                }
                b'\'' if !in_string => {
                    in_char = !in_char;
                    has_code = true;
                }
                b'\\' if in_string || in_char => {
                    // skip the escaped character unless it would hide the
                    // line boundary
                    if !matches!(bytes.get(i + 1), None | Some(&b'\n') | Some(&b'\r')) {
                        i += 1;
                    }
                    has_code = true;
                }
                b'/' if !in_string && !in_char && bytes.get(i + 1) == Some(&b'/') => {
                    comment_start = Some(i);
                }
                b' ' | b'\t' => {}
                _ => has_code = true,
            }
        }
        i += 1;
    }
}

fn apply_suppression(info: &LineInfo<'_>, faults: &mut FaultAccumulator) {
    let Some(offset) = info.comment_offset else {
        return;
    };
    let body = &info.text[offset + 2..];
    if body.trim() != SUPPRESS_DIRECTIVE {
        return;
    }
    if info.has_code {
        faults.suppress_line(info.number);
    } else {
        faults.suppress_line(info.number + 1);
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
