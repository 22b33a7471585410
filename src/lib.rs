pub mod adapter;
pub mod config;
pub mod error;
pub mod headers;
pub mod models;
pub mod profile;
pub mod server;

pub use error::{Error, Result};
