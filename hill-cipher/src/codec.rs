//! Conversion between text and message blocks.
//!
//! Text is padded with spaces to a whole number of blocks, every character is
//! mapped through the alphabet table, and each run of `n` values becomes an
//! `n×1` column matrix.

use crate::errors::HillCipherError;
use crate::field::{Matrix, Z97};
use crate::preset::encoding_table::{char_to_field, field_to_char};

use std::iter;

/// Character appended to the plaintext until it fills the last block.
pub const PADDING_CHAR: char = ' ';

/// Right-pads `text` with [`PADDING_CHAR`] until its length (in chars) is a
/// multiple of `block_size`. Text that already fits is returned unchanged.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidShape` if `block_size` is 0.
///
/// # Example
///
/// ```
/// # use hill_cipher::codec::pad_to_block;
/// assert_eq!(pad_to_block("Hello", 4).unwrap(), "Hello   ");
/// assert_eq!(pad_to_block("Hell", 4).unwrap(), "Hell");
/// assert_eq!(pad_to_block("", 4).unwrap(), "");
/// ```
pub fn pad_to_block(text: &str, block_size: usize) -> Result<String, HillCipherError> {
    if block_size == 0 {
        return Err(HillCipherError::InvalidShape(
            "Block size must be positive".to_string(),
        ));
    }

    let remainder = text.chars().count() % block_size;
    let padding = if remainder == 0 {
        0
    } else {
        block_size - remainder
    };

    let mut padded = String::with_capacity(text.len() + padding);
    padded.push_str(text);
    padded.extend(iter::repeat_n(PADDING_CHAR, padding));
    Ok(padded)
}

/// Splits `text` into `block_size×1` message blocks.
///
/// Every character is validated before any block is built.
///
/// # Errors
///
/// Returns `HillCipherError::UnknownSymbol` for a character outside the alphabet,
/// `HillCipherError::InvalidShape` if `block_size` is 0 and
/// `HillCipherError::ShapeMismatch` if the text length is not a multiple of `block_size`.
pub fn text_to_blocks(text: &str, block_size: usize) -> Result<Vec<Matrix<Z97>>, HillCipherError> {
    if block_size == 0 {
        return Err(HillCipherError::InvalidShape(
            "Block size must be positive".to_string(),
        ));
    }

    let values = text
        .chars()
        .map(char_to_field)
        .collect::<Result<Vec<Z97>, _>>()?;
    if values.len() % block_size != 0 {
        return Err(HillCipherError::ShapeMismatch(format!(
            "Text length {} is not a multiple of the block size {}",
            values.len(),
            block_size
        )));
    }

    values
        .chunks(block_size)
        .map(|chunk| Matrix::from_rows(chunk.iter().map(|&v| vec![v]).collect()))
        .collect()
}

/// Concatenates the characters of `blocks` in block order.
pub fn blocks_to_text(blocks: &[Matrix<Z97>]) -> String {
    blocks
        .iter()
        .flat_map(Matrix::iter)
        .map(|&value| field_to_char(value))
        .collect()
}
