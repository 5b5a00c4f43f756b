//! imgtopwd library crate.
//!
//! Derives a deterministic password from the pixels of an image, optionally
//! mixed with a text seed. The binary is a thin wrapper over
//! [`pipeline::derive_password`].

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod flatten;
pub mod pipeline;

pub use alphabet::Alphabet;
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::derive_password;
