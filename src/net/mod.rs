//! Networking modules for the admin HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the single request/response seam, `api` wraps the assistant
//! and user-management endpoints, `query` is the reusable AI query client, and
//! `types` defines the wire schema.

pub mod api;
pub mod query;
pub mod transport;
pub mod types;
