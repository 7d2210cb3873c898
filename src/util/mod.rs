//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate navigation-policy concerns from page and component
//! logic to improve reuse and testability.

pub mod guard;
