use std::error::Error as _;
use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response.
    Transport(reqwest::Error),
    /// The server answered outside the 2xx range.
    Status(StatusCode),
    /// The response body was not valid JSON.
    Body(reqwest::Error),
}

/// Writes `e` followed by every cause beneath it, separated by `": "`.
fn write_chain(f: &mut fmt::Formatter<'_>, e: &reqwest::Error) -> fmt::Result {
    write!(f, "{}", e)?;
    let mut source = e.source();
    while let Some(cause) = source {
        write!(f, ": {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write_chain(f, e),
            FetchError::Status(_) => write!(f, "Error: Network response was not ok"),
            FetchError::Body(e) => write_chain(f, e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) | FetchError::Body(e) => Some(e),
            FetchError::Status(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
