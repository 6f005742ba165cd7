//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wires browser capabilities into its components and delegates
//! rendering details to `components`.

pub mod login;
