//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the upstream API and the cache store.
//!
//! # Modules
//!
//! - [`cache`] - Cache stores (Redis and in-memory)
//! - [`riot`] - Riot API HTTP client

pub mod cache;
pub mod riot;
