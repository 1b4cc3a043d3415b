pub mod encoding_table;

pub use encoding_table::{ALPHABET, char_to_field, field_to_char};
