//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome while reading/writing shared state from
//! Leptos context providers.

pub mod site_header;
pub mod theme_toggle;
