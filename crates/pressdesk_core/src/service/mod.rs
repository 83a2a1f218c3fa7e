//! Use-case services for footer rendering.
//!
//! # Responsibility
//! - Orchestrate role gating, deadline math, and message resolution into
//!   the entry points the render pipeline calls.
//! - Keep host layers decoupled from calculator and catalog details.

pub mod footer_service;
