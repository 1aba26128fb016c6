use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdsite operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdsite operations
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Template processing error
    Template(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// File handling error
    File(String),
    /// Reserved feature that has no implementation yet
    Unimplemented(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Template(msg) => write!(f, "Template error: {}", msg),
            SiteError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            SiteError::File(msg) => write!(f, "File error: {}", msg),
            SiteError::Unimplemented(msg) => write!(f, "Not implemented: {}", msg),
            SiteError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SiteError {}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl From<String> for SiteError {
    fn from(msg: String) -> Self {
        SiteError::Generic(msg)
    }
}

impl From<&str> for SiteError {
    fn from(msg: &str) -> Self {
        SiteError::Generic(msg.to_string())
    }
}
