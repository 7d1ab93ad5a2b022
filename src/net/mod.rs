//! Networking modules for the auth HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the login/logout REST calls and error classification;
//! `types` defines the shared wire and persisted-record schema.

pub mod api;
pub mod types;
