//! Resolved run configuration.
//!
//! Built once from the command line; there is no config file.

use std::path::PathBuf;

use crate::alphabet::Alphabet;
use crate::cli::Args;
use crate::error::{Error, Result};

/// Default password length when `-l` is not given.
pub const DEFAULT_LENGTH: i64 = 16;

/// Everything the derivation pipeline needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub image_path: PathBuf,
    /// Not validated; see [`crate::digest::truncate`] for how it is applied.
    pub length: i64,
    pub alphabet: Alphabet,
    pub seed: String,
}

impl Config {
    /// Config with default length, base alphabet and no seed.
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            length: DEFAULT_LENGTH,
            alphabet: Alphabet::default(),
            seed: String::new(),
        }
    }

    /// Resolve parsed arguments, failing if no image was given.
    pub fn from_args(args: Args) -> Result<Self> {
        let image_path = args.image.ok_or(Error::MissingArgument)?;
        Ok(Self {
            image_path,
            length: args.length,
            alphabet: Alphabet::new(args.special),
            seed: args.seed.unwrap_or_default(),
        })
    }

    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }
}
