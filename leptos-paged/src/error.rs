use std::fmt;

/// The single error kind of the loader: anything that went wrong between
/// issuing the request and producing a parsed page.
///
/// The variants only exist so logs say what actually happened; the loader
/// treats them all the same way — logged at the fetch boundary and absorbed,
/// leaving the current page retriable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchFailure {
    /// The request never produced a response (DNS, refused, aborted, ...).
    Network(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Decode(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network(message) => write!(formatter, "network error: {message}"),
            FetchFailure::Status(status) => write!(formatter, "request failed ({status})"),
            FetchFailure::Decode(message) => write!(formatter, "malformed response: {message}"),
        }
    }
}

impl std::error::Error for FetchFailure {}
