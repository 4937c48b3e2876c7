pub mod config;
pub mod constants;
pub mod indexer;
pub mod models;
pub mod runtime;
pub mod score;
pub mod store;
pub mod tracing_setup;
pub mod wallet;
pub mod worker;

pub use config::CoreConfig;
