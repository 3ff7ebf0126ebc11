//! Service layer: outbound calls the route handlers delegate to.

pub mod account;
