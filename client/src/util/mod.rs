//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `roles` is the single role → route table; `auth` holds the session probe
//! both the login page and any future auth route can install.

pub mod auth;
pub mod roles;
