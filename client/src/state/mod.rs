//! Reactive application state, provided as `RwSignal` contexts by the root.

pub mod board;
pub mod ui;
