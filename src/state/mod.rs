//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data mutated through explicit transition methods;
//! `app` provides them to the component tree as `RwSignal` contexts.

pub mod session;
