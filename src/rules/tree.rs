use crate::fault::{Fault, FaultAccumulator, FaultKind};
use crate::syntax::NodeTag;

use super::{FileContext, TreeRule};

/// Byte-compares the canonical rendering against the original source. A
/// tree with parse errors is never rendered; each error becomes its own
/// fault instead.
pub struct CheckFormat;

impl TreeRule for CheckFormat {
    fn check_tree(&self, ctx: &FileContext<'_>, faults: &mut FaultAccumulator) {
        if ctx.tree.errors().is_empty() {
            if ctx.tree.render() != ctx.source {
                faults.add(Fault::new(0, 0, FaultKind::ImproperlyFormatted));
            }
            return;
        }

        for error in ctx.tree.errors() {
            let location = ctx.tree.location_at(error.offset);
            faults.add(Fault::new(
                location.line,
                location.column,
                FaultKind::SyntaxError(error.clone()),
            ));
        }
    }
}

/// A file whose root declarations include bare data fields acts as a struct
/// and its name should be capitalized; otherwise it should not be.
pub struct FileAsStruct;

impl TreeRule for FileAsStruct {
    fn check_tree(&self, ctx: &FileContext<'_>, faults: &mut FaultAccumulator) {
        let has_top_level_fields = ctx
            .tree
            .nodes()
            .iter()
            .any(|n| n.tag == NodeTag::ContainerField);

        let actual_capitalized = ctx
            .file_name
            .chars()
            .next()
            .is_some_and(char::is_uppercase);

        if has_top_level_fields != actual_capitalized {
            faults.add(Fault::new(
                1,
                1,
                FaultKind::FileNamingMismatch {
                    should_capitalize: !actual_capitalized,
                },
            ));
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
