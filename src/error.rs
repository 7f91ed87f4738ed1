use std::io;

/// Exit status for usage errors (unrecognized flags, malformed option values)
pub const EXIT_USAGE: u8 = 2;
/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

/// Everything that can stop an invocation before a transfer is handed off
#[derive(Debug, thiserror::Error)]
pub enum ScpError {
    /// A required input to the path-spec parser was not provided
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("cannot source and sink at the same time")]
    ConflictingMode,
    #[error("source file path required")]
    MissingSource,
    #[error("destination file path required")]
    MissingDestination,
    #[error("port number cannot be 0")]
    InvalidPort,
    /// Unrecognized option or malformed option value, holds the rendered
    /// parser error followed by the usage text
    #[error("{0}")]
    Usage(String),
    #[error("failed writing diagnostics: {0}")]
    Io(#[from] io::Error),
}

impl ScpError {
    pub fn exit_code(&self) -> u8 {
        match self {
            ScpError::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, ScpError::Usage(_))
    }
}
