//! Networking modules for the external auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the `/auth/*` calls, `error` classifies failures, and `types`
//! defines the JSON wire schema consumed from the backend.

pub mod api;
pub mod error;
pub mod types;
