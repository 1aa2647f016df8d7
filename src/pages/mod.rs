//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns window-level orchestration and delegates rendering details
//! to `components`.

pub mod home;
