//! Render-pipeline extension points.
//!
//! This module defines the in-process registration table for named text
//! filters and the per-call context they receive. Hosts build the registry
//! once at startup and apply points during render calls.

pub mod registry;
