//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls and uniform bearer-token attachment; `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod types;
