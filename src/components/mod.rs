//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and access-control wrappers while reading
//! session state from the Leptos context provider.

pub mod conduct_dialog;
pub mod guard;
pub mod navbar;
