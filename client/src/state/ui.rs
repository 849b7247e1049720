//! Transient UI state: busy flags for the two awaitable operations.
//!
//! Each flag guards one in-flight operation so the triggering control can be
//! disabled against re-entrant invocation. They are independent: a suggestion
//! and an export may be pending at the same time.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Busy indicators, kept out of domain state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// A suggestion request is in flight.
    pub loading_suggestion: bool,
    /// An export is in flight; spans the whole pipeline, cleared on every
    /// path before the outcome is surfaced.
    pub is_exporting: bool,
}
