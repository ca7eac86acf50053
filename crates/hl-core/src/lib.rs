//! # hl-core
//!
//! Core types shared across the Hyperlocal client crates.
//!
//! - Entity structs mirroring the backend's JSON payloads (users, communities,
//!   join requests, admin console views)
//! - Wire enums with their display labels
//! - The paginated `Page<T>` envelope
//! - Auth/verification response shapes
//! - Client-side input validation rules
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod pagination;
pub mod responses;
pub mod validation;
