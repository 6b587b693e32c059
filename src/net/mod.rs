//! Networking modules for the auth API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the store's `AuthApi` seam over HTTP, `error` is the
//! failure taxonomy, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
