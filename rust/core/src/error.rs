use thiserror::Error;

/// Result type for floor-plan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a floor plan
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input text was empty or contained only whitespace.
    #[error("Empty floor plan")]
    EmptyInput,

    /// The grid was built, but no parenthesized room label exists anywhere
    /// in it. This is the signal that the input is not a floor plan.
    #[error("No room names found in floor plan")]
    NoRoomsFound,
}
