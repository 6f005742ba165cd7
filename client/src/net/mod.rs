//! Networking modules for the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the JWT token endpoint, `login` runs the customer login
//! flow on top of it, and `types` defines the wire schema.

pub mod api;
pub mod login;
pub mod types;
