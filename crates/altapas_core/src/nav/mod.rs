//! Section navigation.
//!
//! # Responsibility
//! - Translate navigation intents (link, footer link, call-to-action, history,
//!   initial load) into one command type.
//! - Keep visible section, active link, title and fragment consistent.
//!
//! # Invariants
//! - At most one section is visible after any command.
//! - The active link and the title always follow the last shown section.
//! - Unknown sections degrade to "nothing visible" plus a warning log.
//!
//! # See also
//! - crate::page::PageSurface

pub mod controller;
pub mod fragment;
pub mod intent;
