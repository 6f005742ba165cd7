//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `button`, `notice` and `input_group` are presentational building blocks
//! shared across account pages; `login_form` is the interactive login form.

pub mod button;
pub mod input_group;
pub mod login_form;
pub mod notice;
