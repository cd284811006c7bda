//! Short random identifiers for processed users.

use crate::random::RandomSource;

/// Symbols an identifier may contain.
pub const ID_ALPHABET: &[u8; 12] = b"ABCDEF123456";

/// Number of symbols in a generated identifier.
pub const ID_LENGTH: usize = 6;

/// Generate an identifier: [`ID_LENGTH`] characters, each drawn
/// independently and uniformly from [`ID_ALPHABET`].
///
/// Uniqueness is not checked. With a 12-symbol alphabet and 6 positions
/// there are only ~3 million combinations, so callers keyed on these ids
/// must tolerate the occasional collision.
pub fn generate(random: &mut dyn RandomSource) -> String {
    let mut id = String::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        let index = random.below(ID_ALPHABET.len() as u32) as usize;
        id.push(ID_ALPHABET[index] as char);
    }
    id
}
