//! SourceFilter trait
//!
//! A whole-file text transform. The comment scanner is one implementation; the
//! processing layer only depends on this trait.

use super::state::ScanStats;

/// Whole-input text transform
pub trait SourceFilter {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Transform one complete input.
    ///
    /// Implementations must reset any internal state on entry so that a single
    /// instance can be reused for independent inputs.
    fn transform(&mut self, input: &str) -> String;

    /// Counters from the last transform, for filters that keep any
    fn stats(&self) -> ScanStats {
        ScanStats::default()
    }
}

/// Filter that returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl SourceFilter for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn transform(&mut self, input: &str) -> String {
        input.to_string()
    }
}
