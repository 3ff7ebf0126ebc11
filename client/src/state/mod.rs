//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `alert`, `password_flow`) so
//! components depend on small focused models that can be unit tested
//! without a browser.

pub mod alert;
pub mod auth;
pub mod password_flow;
