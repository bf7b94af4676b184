use thiserror::Error;

/// Errors reported by the collections in this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index past the end of a `DynamicArray` or bucket array
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The length of the container at the time of the request
        length: usize,
    },

    /// A hash function name that does not match any built-in
    #[error("unknown hash function: {0}")]
    UnknownHashFunction(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
