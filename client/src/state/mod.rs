//! Page-level UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data structs held in `RwSignal`s. Auth state and CRUD list state come
//! from `portal`; what lives here is purely presentational bookkeeping.

pub mod dashboard;
pub mod editor;
pub mod notice;
