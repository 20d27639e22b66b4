pub mod config;
pub mod extractor;
mod json;
pub mod services;
pub mod store;
