//! Axum extractors for request handling
//!
//! Staff authentication, validated bodies, pagination and path parameters.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::StaffUser;
pub use pagination::{Pagination, PaginationParams, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use path::ValidPath;
pub use validated::ValidatedJson;
