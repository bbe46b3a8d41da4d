//! Local view state for the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is owned by exactly one mounted component through an
//! `RwSignal`; nothing is shared through context.

pub mod nav_menu;
pub mod signup;
