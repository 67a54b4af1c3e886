//! Shortcode generation and format checks.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Length of generated shortcodes.
pub const GENERATED_LENGTH: usize = 6;

/// Pattern every client-supplied shortcode must satisfy.
pub const SHORTCODE_PATTERN: &str = "^[0-9a-zA-Z_]{4,}$";

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHORTCODE_PATTERN).expect("shortcode pattern compiles"));

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";

/// Generates a random shortcode of [`GENERATED_LENGTH`] characters drawn
/// from `[0-9a-zA-Z_]`.
pub fn generate_shortcode() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` matches [`SHORTCODE_PATTERN`].
pub fn is_valid_shortcode(code: &str) -> bool {
    SHORTCODE_REGEX.is_match(code)
}
