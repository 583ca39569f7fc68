//! Shared client-side state modules.

pub mod contact;
pub mod ui;
