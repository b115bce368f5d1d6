//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and record widgets while reading shared
//! state from Leptos context providers. Anything that talks to the backend
//! is driven by a page; widgets only receive data and callbacks.

pub mod admin_sidebar;
pub mod config_banner;
pub mod data_table;
pub mod entity_form;
pub mod guard;
pub mod modal;
pub mod notice_banner;
pub mod stat_card;
