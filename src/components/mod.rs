//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and sections while reading/writing shared
//! state from Leptos context providers set up in `app`.

pub mod contact_form;
pub mod header;
pub mod scroll_top;
pub mod sections;
pub mod skills;
