//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components own their local view state through signals; pages only compose
//! them.

pub mod input_field;
pub mod nav_link;
pub mod navbar;
pub mod signup_button;
pub mod signup_form;
