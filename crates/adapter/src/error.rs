//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The result type that uses [ObserverError] as the error type.
pub type Result<T> = std::result::Result<T, ObserverError>;

/// The error type for managing the observers of a data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverError {
    /// The observer is already registered with the data set.
    AlreadyRegistered,

    /// The observer was never registered with the data set, or it has already
    /// been unregistered.
    NotRegistered,
}

impl Display for ObserverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let observer_error = "observer error:";

        match self {
            ObserverError::AlreadyRegistered => {
                write!(f, "{observer_error} the observer is already registered")
            }
            ObserverError::NotRegistered => {
                write!(f, "{observer_error} the observer was not registered")
            }
        }
    }
}

impl Error for ObserverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_error_kind() {
        assert_eq!(
            ObserverError::AlreadyRegistered.to_string(),
            "observer error: the observer is already registered"
        );
        assert_eq!(
            ObserverError::NotRegistered.to_string(),
            "observer error: the observer was not registered"
        );
    }
}
