pub mod classes;
pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod preprocess;
pub mod server;
pub mod uploads;

pub use error::{Error, Result};
