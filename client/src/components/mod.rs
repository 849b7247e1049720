//! UI components for the single board-editing page.

pub mod action_bar;
pub mod app_footer;
pub mod app_header;
pub mod board_view;
pub mod color_swatches;
pub mod font_picker;
pub mod kind_toggle;
pub mod style_controls;
pub mod text_controls;
