//! Background execution of seating lookups.
//!
//! The UI thread never blocks on the network: [`LookupRuntime`] forwards
//! dispatches to a worker thread and drains results on every frame.

mod commands;
mod runtime;
mod worker;

pub use commands::LookupRows;
pub(crate) use commands::{LookupOutcome, LookupResult};
pub(crate) use runtime::LookupRuntime;
