pub mod generator;
pub mod writer;

pub use generator::{SynthParams, generate};
pub use writer::write_yaml;
