//! Networking modules for the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the browser-side REST calls to our server, and `types`
//! defines the wire schema shared with the server's upstream relay.

pub mod api;
pub mod types;
