//! Browser bindings for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `portal` builds every request; this module only supplies the compiled-in
//! configuration and the `gloo-net` transport that sends them.

pub mod config;
pub mod transport;
