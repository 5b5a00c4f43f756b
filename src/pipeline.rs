//! Password derivation pipeline.
//!
//! read image → flatten → prepend seed → hash → map onto alphabet.

use crate::config::Config;
use crate::digest::hash_to_password;
use crate::error::Result;
use crate::flatten::flatten_image;

/// Prepend the seed to the flattened image text.
pub fn combine(seed: &str, flattened: &str) -> String {
    let mut combined = String::with_capacity(seed.len() + flattened.len());
    combined.push_str(seed);
    combined.push_str(flattened);
    combined
}

/// Derive the password from already-flattened image text.
pub fn derive_from_text(flattened: &str, config: &Config) -> String {
    let combined = combine(&config.seed, flattened);
    hash_to_password(&combined, config.length, &config.alphabet)
}

/// Run the full pipeline for one configuration.
pub fn derive_password(config: &Config) -> Result<String> {
    let flattened = flatten_image(&config.image_path)?;
    log::debug!(
        "Hashing {} image chars (seed: {} bytes, alphabet: {} chars)",
        flattened.len(),
        config.seed.len(),
        config.alphabet.len()
    );
    Ok(derive_from_text(&flattened, config))
}
