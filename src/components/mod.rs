//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and access-control surfaces while
//! reading shared state from Leptos context providers.

pub mod navbar;
pub mod route_guard;
