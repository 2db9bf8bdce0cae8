//! Browser binding for the Al Tapas site.
//!
//! # Responsibility
//! - Bind the live DOM to `altapas_core` and wire page events.
//! - Export the start-up and utility calls used by the page markup.
//!
//! # Invariants
//! - All navigation decisions are made in `altapas_core`; this crate only
//!   reads events and writes DOM state.

pub mod api;
mod app;
mod console;
mod dom;
mod effects;
mod toast;

pub use dom::BindError;
