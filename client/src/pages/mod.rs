//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is a thin route wrapper; rendering details live in `components`.

pub mod about;
pub mod home;
pub mod login;
pub mod signup;
