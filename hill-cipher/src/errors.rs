#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// The key matrix is singular over Z_97, so no decryption key exists.
    #[error("NotInvertible: {0}")]
    NotInvertible(String),
    /// Division by the zero element of the field.
    #[error("Division by zero in Z_97")]
    DivisionByZero,
    /// A character that has no entry in the alphabet table.
    #[error("UnknownSymbol: {0:?} is not part of the alphabet")]
    UnknownSymbol(char),

    #[error("ShapeMismatch: {0}")]
    ShapeMismatch(String),
    #[error("Index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("InvalidShape: {0}")]
    InvalidShape(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
