//! Browser capability helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, page
//! navigation) behind small traits so the login flow can run natively.

pub mod navigation;
pub mod storage;
