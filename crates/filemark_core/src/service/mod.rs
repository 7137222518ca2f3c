//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, allocator, view and resolver into use-case APIs.
//! - Keep host layers decoupled from storage details.

pub mod mark_service;
