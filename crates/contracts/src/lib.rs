//! Shared types for the tailor shop client.
//!
//! Everything here is plain Rust with no browser dependencies, so the rules
//! that decide what the pages show (derived fields, filtering, form coercion,
//! session persistence) can be unit-tested natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
