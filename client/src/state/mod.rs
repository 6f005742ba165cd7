//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so it can be tested without a
//! browser; components hold it in signals.

pub mod login;
pub mod notice;
