//! Shared diagnostic accumulator.
//!
//! Function bodies are validated independently, possibly on different
//! worker threads; each one commits its diagnostics in a single append.
//! Reporting order is made deterministic by `into_sorted`, not by the
//! order commits happen to land in.

use dashmap::DashMap;

use crate::diagnostics::Diagnostic;

/// Append-only diagnostic store, keyed by file, safe for concurrent commits.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    by_file: DashMap<String, Vec<Diagnostic>>,
}

impl DiagnosticSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_file: DashMap::new(),
        }
    }

    pub fn push(&self, diagnostic: Diagnostic) {
        self.by_file
            .entry(diagnostic.file.clone())
            .or_default()
            .push(diagnostic);
    }

    /// Commit a batch of diagnostics. One validated body commits exactly once.
    pub fn extend(&self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_file.iter().map(|entry| entry.value().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain into a deterministic (file, start, code) ordering for reporting.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut all: Vec<Diagnostic> = self
            .by_file
            .into_iter()
            .flat_map(|(_, diagnostics)| diagnostics)
            .collect();
        all.sort_by(|a, b| {
            (a.file.as_str(), a.start, a.code).cmp(&(b.file.as_str(), b.start, b.code))
        });
        all
    }
}
