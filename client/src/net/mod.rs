//! Networking modules for the comment/marker backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP requests and `types` defines the wire schema shared
//! with the backend.

pub mod api;
pub mod types;
