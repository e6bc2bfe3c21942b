//! Configuration file handling.
//!
//! - [`env_file`] - .env parsing, serialization, and write-back

pub mod env_file;

pub use env_file::{EnvFile, EnvMap};
