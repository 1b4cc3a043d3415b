use crate::errors::HillCipherError;
use crate::field::Z97;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of symbols in the alphabet. Equal to the field modulus, so every
/// field element names exactly one character.
pub const ALPHABET_SIZE: usize = 97;

/// The symbol table, indexed 0..=96.
///
/// The order is part of the ciphertext format: two implementations only
/// interoperate if they agree on it character for character.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ' ', '~', '-', '=', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '[', ']', ';',
    '\'', ',', '.', '/', '{', '}', ':', '"', '<', '>', '?', '`', '\\', '|', '\t', '\n',
];

lazy_static! {
    /// A static HashMap mapping each alphabet character to its index (0 to 96).
    pub static ref CHAR_TO_INDEX_MAP: HashMap<char, u8> = ALPHABET
        .iter()
        .enumerate()
        .map(|(index, &ch)| (ch, index as u8))
        .collect();
}

/// Returns the field element assigned to `c`.
///
/// # Errors
///
/// Returns `HillCipherError::UnknownSymbol` if `c` is not in the alphabet.
///
/// # Example
///
/// ```
/// # use hill_cipher::field::Z97;
/// # use hill_cipher::preset::encoding_table::char_to_field;
/// assert_eq!(char_to_field('T').unwrap(), Z97::new(19));
/// assert!(char_to_field('é').is_err());
/// ```
pub fn char_to_field(c: char) -> Result<Z97, HillCipherError> {
    CHAR_TO_INDEX_MAP
        .get(&c)
        .map(|&index| Z97::new(i64::from(index)))
        .ok_or(HillCipherError::UnknownSymbol(c))
}

/// Returns the character assigned to `value`. Total over the field.
///
/// # Example
///
/// ```
/// # use hill_cipher::field::Z97;
/// # use hill_cipher::preset::encoding_table::field_to_char;
/// assert_eq!(field_to_char(Z97::new(17)), 'R');
/// assert_eq!(field_to_char(Z97::new(96)), '\n');
/// ```
pub fn field_to_char(value: Z97) -> char {
    ALPHABET[usize::from(value.value())]
}
