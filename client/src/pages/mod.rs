//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and the async flow that drives it, and
//! delegates shared chrome to `components`.

pub mod forgot_password;
pub mod landing;
pub mod login;
