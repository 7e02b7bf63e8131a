//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome for the sign-in pages; they receive state
//! through props and never own form state themselves.

pub mod auth_card;
pub mod confirm_dialog;
pub mod toast;
