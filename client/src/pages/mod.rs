//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome
//! to `components`.

pub mod contact_form;
pub mod hello;
pub mod home;
pub mod result;
