//! Interactive terminal interface for seating lookups.
//!
//! [`state`] owns the application model, [`view`] turns it into plain data
//! for each frame, and the renderer and [`components`] draw that data. Lookups
//! run on the worker in [`crate::lookup`] and come back through `dispatch`.

mod actions;
pub mod components;
mod dispatch;
pub mod input;
pub mod notify;
pub mod panel;
mod render;
mod runtime;
mod state;
pub mod tabs;
pub mod theme;
pub mod view;

pub use runtime::run;
pub use state::{App, AppOptions, UiState};
pub use tabs::{LabelLayout, TabId};
pub use theme::{ThemeController, ThemeMode};
