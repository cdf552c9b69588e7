//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod checkout;
pub mod config;
pub mod dark_mode;
pub mod datetime;
pub mod dialog;
pub mod geo;
pub mod storage;
