pub mod config;
pub mod error;
pub mod model;
pub mod paths;

pub use error::{Result, TraceprepError};
