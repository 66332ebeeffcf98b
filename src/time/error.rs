use thiserror::Error;

/// An error that occurred while reading a suite timestamp.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("'{0}' is not an ISO-8601 timestamp")]
    Syntax(String),
    #[error("'{0}' does not exist in the local time zone")]
    NonexistentLocalTime(String),
    #[error("'{0}' is not a valid date format")]
    Format(String),
}
