//! Integration test utilities for the staff panel
//!
//! Tests boot the real router against PostgreSQL and Redis and skip
//! themselves when `DATABASE_URL` or `REDIS_URL` is not set.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
