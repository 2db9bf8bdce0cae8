//! Site domain model.
//!
//! # Responsibility
//! - Define the identifiers shared by navigation, configuration and hosts.
//!
//! # Invariants
//! - A section is identified by the element id it carries in the page.
//! - Identifiers are compared verbatim (no case folding, no trimming).
//!
//! # See also
//! - crate::nav::controller

pub mod section;
