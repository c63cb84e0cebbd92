// In-memory scan history for ShieldSentry
// Most-recent-first, optionally capped; gone when the process exits

use crate::models::ScanResult;

/// Most-recent-first list of scan results.
///
/// Unbounded by default; display call sites usually cap it at the 10 most
/// recent results.
#[derive(Debug, Clone, Default)]
pub struct ScanHistory {
    entries: Vec<ScanResult>,
    cap: Option<usize>,
}

impl ScanHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `cap` results, dropping the oldest.
    pub fn capped(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap: Some(cap),
        }
    }

    /// Insert at the front; past the cap, the oldest entry is dropped.
    pub fn record(&mut self, result: ScanResult) {
        self.entries.insert(0, result);
        if let Some(cap) = self.cap {
            self.entries.truncate(cap);
        }
    }

    /// The most recent result, if any.
    pub fn latest(&self) -> Option<&ScanResult> {
        self.entries.first()
    }

    /// Newest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &ScanResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }
}
