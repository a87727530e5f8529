//! Dynamic SQL assembled from optional filters

mod log_filter;

pub use log_filter::build_log_query;
