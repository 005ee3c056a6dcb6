use std::error::Error;

/// Turns the `Err` of a fallible `try_` method into a panic, for its panicking counterpart.
pub(crate) trait ResultExtension<T> {
    /// Returns the contained [`Ok`] value, or panics with the [`Display`](std::fmt::Display)
    /// message of the error. The panic is reported at the caller's location.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
