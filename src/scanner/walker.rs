use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::IgnoreTracker;

/// Canonical paths already visited during this run. Shared across all
/// top-level arguments but mutated only by the traversal thread, so it
/// needs no locking.
pub type VisitedSet = HashSet<PathBuf>;

/// Recursive, single-threaded directory traversal. Every path is
/// canonicalized and recorded in the visited set before any further I/O, so
/// symlink cycles and duplicate arguments are walked at most once. Eligible
/// files are handed to `submit` (which dispatches them to the worker pool).
pub struct Walker<'a> {
    tracker: &'a IgnoreTracker,
    visited: &'a mut VisitedSet,
}

impl<'a> Walker<'a> {
    pub fn new(tracker: &'a IgnoreTracker, visited: &'a mut VisitedSet) -> Self {
        Self { tracker, visited }
    }

    pub fn walk<F>(&mut self, path: &Path, submit: &mut F)
    where
        F: FnMut(PathBuf),
    {
        self.walk_inner(path, true, submit);
    }

    fn walk_inner<F>(&mut self, path: &Path, is_root: bool, submit: &mut F)
    where
        F: FnMut(PathBuf),
    {
        let canonical = match dunce::canonicalize(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("ziglint: warning: cannot resolve {}: {e}", path.display());
                return;
            }
        };

        if !self.visited.insert(canonical.clone()) {
            return;
        }

        let metadata = match fs::metadata(&canonical) {
            Ok(m) => m,
            Err(e) => {
                eprintln!(
                    "ziglint: warning: cannot access {}: {e}",
                    canonical.display()
                );
                return;
            }
        };

        if metadata.is_dir() {
            self.walk_directory(&canonical, submit);
        } else if is_root || self.is_eligible(&canonical) {
            // directly-named files bypass the extension and ignore filters
            submit(canonical);
        }
    }

    fn walk_directory<F>(&mut self, dir: &Path, submit: &mut F)
    where
        F: FnMut(PathBuf),
    {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("ziglint: warning: cannot read {}: {e}", dir.display());
                return;
            }
        };

        let mut children: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .collect();
        children.sort();

        for child in children {
            self.walk_inner(&child, false, submit);
        }
    }

    fn is_eligible(&self, path: &Path) -> bool {
        let is_zig = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "zig");
        is_zig && !self.tracker.is_ignored(path)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
