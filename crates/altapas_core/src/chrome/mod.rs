//! Page chrome behaviours around the navigation controller.
//!
//! # Responsibility
//! - Model the peripheral page behaviours (mobile menu, navbar on scroll,
//!   keyboard focus mode, announcer, toasts, hover/reveal effects, contact
//!   acknowledgement) as small host-independent reducers.
//!
//! # Invariants
//! - Each reducer owns only its own state; none reads controller state.
//! - Reducers report what changed; hosts apply it to the DOM.

pub mod announce;
pub mod contact;
pub mod effects;
pub mod focus;
pub mod menu;
pub mod scroll;
pub mod toast;
