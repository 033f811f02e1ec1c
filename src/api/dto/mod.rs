//! Data Transfer Objects for API requests and responses.
//!
//! Response bodies for accounts and match summaries are the domain entities
//! themselves; this module holds the request-side and health shapes.

pub mod health;
pub mod matches;
