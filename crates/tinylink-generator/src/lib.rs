pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use tinylink_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage,
/// so a generated code may already be taken. Callers decide what to do
/// about that.
pub trait Generator: Send + Sync + 'static {
    /// Generates a short code made of `tinylink_core::shortcode::ALPHABET`
    /// symbols, `tinylink_core::shortcode::LENGTH` characters long.
    fn generate(&self) -> ShortCode;
}
