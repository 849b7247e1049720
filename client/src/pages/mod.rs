//! Page composition. The app is a single editor page.

pub mod editor;
