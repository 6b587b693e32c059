//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; pages own the
//! route-scoped orchestration.

pub mod notice_tray;
