//! Small shared helpers for controls and resource handling.

pub mod controls;
pub mod overlay;
