//! Slug generation utilities.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Slug length used when none (or zero) is configured.
pub const DEFAULT_SLUG_LENGTH: usize = 6;

/// Generator for random short-link slugs.
#[derive(Debug, Clone)]
pub struct SlugGenerator {
    length: usize,
}

impl Default for SlugGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SLUG_LENGTH)
    }
}

impl SlugGenerator {
    /// Create a generator producing slugs of `length` characters.
    ///
    /// A zero length falls back to [`DEFAULT_SLUG_LENGTH`]; slugs are never empty.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        let length = if length == 0 { DEFAULT_SLUG_LENGTH } else { length };
        Self { length }
    }

    /// Length of the generated slugs.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Generate a new slug from the thread-local RNG.
    ///
    /// Slugs are lowercase base-36 (`[a-z0-9]`) and carry no time component.
    #[must_use]
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a new slug from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
