use crate::Generator;
use std::sync::atomic::{AtomicU64, Ordering};
use tinylink_core::shortcode::LENGTH;
use tinylink_core::ShortCode;

/// A short code generator using a sequential counter.
///
/// This generator produces codes like "sq0000", "sq0001", etc: the prefix
/// followed by the counter, zero-padded to the short code length. The
/// counter wraps once it no longer fits, so codes repeat after
/// `10^(6 - prefix.len())` calls.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
    modulus: u64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
            modulus: self.modulus,
        }
    }
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    ///
    /// The prefix is truncated to five characters so at least one counter
    /// digit remains.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        let prefix: String = prefix.into().chars().take(LENGTH - 1).collect();
        let digits = (LENGTH - prefix.chars().count()) as u32;
        Self {
            counter: AtomicU64::new(offset),
            prefix,
            modulus: 10_u64.pow(digits),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst) % self.modulus;
        let width = LENGTH - self.prefix.chars().count();
        ShortCode::new_unchecked(format!("{}{:0width$}", self.prefix, count, width = width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqGenerator::with_prefix("sq");

        assert_eq!(generator.generate().as_str(), "sq0000");
        assert_eq!(generator.generate().as_str(), "sq0001");
        assert_eq!(generator.generate().as_str(), "sq0002");
    }

    #[test]
    fn with_offset() {
        let generator = SeqGenerator::with_offset("sq", 1000);

        assert_eq!(generator.generate().as_str(), "sq1000");
        assert_eq!(generator.generate().as_str(), "sq1001");
    }

    #[test]
    fn wraps_when_digits_run_out() {
        let generator = SeqGenerator::with_offset("abcd", 99);

        assert_eq!(generator.generate().as_str(), "abcd99");
        assert_eq!(generator.generate().as_str(), "abcd00");
    }

    #[test]
    fn long_prefix_is_truncated() {
        let generator = SeqGenerator::with_prefix("toolong");

        assert_eq!(generator.generate().as_str(), "toolo0");
    }

    #[test]
    fn codes_are_valid() {
        let generator = SeqGenerator::with_prefix("s_");
        for _ in 0..50 {
            let code = generator.generate();
            assert!(ShortCode::new(code.as_str()).is_ok());
        }
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::with_prefix("sq");
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "sq0002");
        assert_eq!(cloned.generate().as_str(), "sq0002");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }
}
