//! Browser glue kept out of the page logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `window`, `document`, and `localStorage` behind
//! small functions and traits so `state` stays pure and testable natively.

pub mod document;
pub mod frame;
pub mod storage;
pub mod viewport;
