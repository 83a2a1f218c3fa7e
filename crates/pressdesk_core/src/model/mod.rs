//! Domain model for dashboard render requests.
//!
//! # Responsibility
//! - Define the principal shape supplied by the host per render call.
//! - Keep authorization branching down to plain role-label checks.
//!
//! # Invariants
//! - No model type is persisted; everything is request-scoped.
//! - An unauthenticated principal never matches any role.

pub mod principal;
