//! Configuration for embedders.

pub mod store_config;

pub use store_config::TallyConfig;
