//! Widgets shared by the renderer.

/// Results table rendering.
pub mod tables;
/// Prompt, input, busy indicator and tab bar.
pub mod tabs;
/// Transient notification banner.
pub mod toast;

pub use tables::render_table;
pub use tabs::{BusyState, InputContext, render_input_with_tabs};
pub use toast::render_toast;
