//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, remote calls, list
//! state) and delegates rendering details to `components`.

pub mod account;
pub mod admin_dashboard;
pub mod admin_login;
pub mod entity;
pub mod home;
pub mod instructor;
pub mod login;
pub(crate) mod panels;
pub mod student;
