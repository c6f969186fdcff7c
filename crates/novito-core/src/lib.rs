//! # novito-core
//!
//! Core types shared across all Novito crates.
//!
//! This crate provides the foundational types the dashboard client moves
//! between the backend and its views:
//! - Entity structs for transmitted domain objects (tasks, suggestions, audits, workspaces)
//! - Closed enums (roles, task statuses, suggestion types, analytics and smart actions)
//! - Request payloads accepted by the backend's mutation endpoints
//! - Response payloads for auth, analytics, briefing, chat, and agent actions
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod requests;
pub mod responses;

pub use errors::CoreError;
