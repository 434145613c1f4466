//! Input error types.

/// Failure to obtain input at all.
///
/// Invalid user input is never an error; it is rejected and re-prompted.
/// These variants cover the cases where re-prompting cannot help.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    /// Reading from or writing to the console failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// The input stream reached end-of-file while waiting for a line.
    #[display("Input stream closed while waiting for a response")]
    Closed,

    /// The pattern handed to [`crate::SafeInput::matching`] does not compile.
    #[display("Invalid input pattern: {}", _0)]
    #[from]
    Pattern(regex::Error),
}
