pub mod config;
pub mod observability;
pub mod seed;
pub mod service;
pub mod store;
