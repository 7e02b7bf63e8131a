//! Per-page form state.
//!
//! DESIGN
//! ======
//! Each sign-in page owns exactly one of these models; there is no shared
//! store, so a failure on one form cannot leak into another.

pub mod form;
pub mod login;
pub mod password_reset;
