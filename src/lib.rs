//! Core of a map-based personal workout tracker.
//!
//! The host shell owns the actual map, form, and list widgets plus the
//! process entry point; this crate owns the workout model, validation,
//! storage, and the controller that reacts to UI events. A host wires it up
//! the way `demos/scripted_session.rs` does: load the configuration, build
//! the snapshot repository, rehydrate, then drive the controller from the
//! UI event channel.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use error::TrackerError;

/// Install the global tracing subscriber. Call once from the host before
/// constructing the controller; `RUST_LOG` filters as usual.
pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}
