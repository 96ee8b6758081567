use std::collections::HashSet;

use super::Fault;

/// Per-file fault collector with line-level suppression.
///
/// Suppression directives can appear after the faulty line was scanned
/// (trailing `// ziglint: ignore`), so filtering is deferred: faults are
/// buffered as discovered and the suppressed-line set is applied once at
/// drain time. Never shared across files or threads.
#[derive(Debug, Default)]
pub struct FaultAccumulator {
    faults: Vec<Fault>,
    suppressed: HashSet<usize>,
}

impl FaultAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fault unless its line is already suppressed.
    pub fn add(&mut self, fault: Fault) {
        if self.suppressed.contains(&fault.line) {
            return;
        }
        self.faults.push(fault);
    }

    /// Suppress all faults on line `n`, including any already recorded.
    pub fn suppress_line(&mut self, n: usize) {
        self.suppressed.insert(n);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faults
            .iter()
            .all(|f| self.suppressed.contains(&f.line))
    }

    /// Consume the accumulator, returning faults ordered by ascending line
    /// number with discovery order preserved among equal lines.
    #[must_use]
    pub fn drain_sorted(self) -> Vec<Fault> {
        let suppressed = self.suppressed;
        let mut faults: Vec<Fault> = self
            .faults
            .into_iter()
            .filter(|f| !suppressed.contains(&f.line))
            .collect();
        faults.sort_by_key(|f| f.line);
        faults
    }
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod tests;
