//! Terminal client for looking up exam seating.
//!
//! The root module re-exports the UI entry points and the HTTP client types
//! so the binary, and anyone embedding the interface, can wire an
//! [`App`] to a [`SeatingApi`] without digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod lookup;
pub mod preferences;
pub mod ui;

pub use lookup::LookupRows;
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceError, PreferenceStore};
pub use ui::{App, AppOptions, TabId, ThemeController, ThemeMode, run};

pub use seatview_api::{
	ClientConfig, HttpSeatingClient, LookupError, QueryKind, SeatingApi, SeatingAssignment,
	SeatingRecord, normalize_key,
};
