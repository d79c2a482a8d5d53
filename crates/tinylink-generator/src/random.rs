use crate::Generator;
use std::iter;
use tinylink_core::shortcode::{ALPHABET, LENGTH};
use tinylink_core::ShortCode;

/// Draws every character independently and uniformly from the
/// 63-symbol short code alphabet.
///
/// No uniqueness guarantee: with 63^6 possible codes collisions are
/// unlikely but possible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let code: String =
            iter::repeat_with(|| ALPHABET[rand::random_range(0..ALPHABET.len())] as char)
                .take(LENGTH)
                .collect();
        ShortCode::new_unchecked(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_codes_pass_validation() {
        let generator = RandomGenerator::new();
        for _ in 0..1_000 {
            let code = generator.generate();
            assert_eq!(code.as_str().len(), LENGTH);
            assert!(ShortCode::new(code.as_str()).is_ok(), "invalid code {code}");
        }
    }

    #[test]
    fn generated_codes_vary() {
        let generator = RandomGenerator::new();
        let codes: HashSet<_> = (0..100).map(|_| generator.generate()).collect();
        // 100 draws out of 63^6 codes; a handful of repeats would already be absurd
        assert!(codes.len() > 90);
    }

    #[test]
    fn every_symbol_eventually_shows_up() {
        let generator = RandomGenerator::new();
        let seen: HashSet<u8> = (0..5_000)
            .flat_map(|_| generator.generate().as_str().bytes().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), ALPHABET.len());
    }
}
