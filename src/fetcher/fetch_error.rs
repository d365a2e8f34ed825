use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Network(String),
    JsonParse(String),
    Deserialize(String),
    Io(String),
    RetriesExhausted { page: u32, last: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            FetchError::Deserialize(msg) => write!(f, "Unexpected listing shape: {msg}"),
            FetchError::Io(msg) => write!(f, "Snapshot write error: {msg}"),
            FetchError::RetriesExhausted { page, last } => {
                write!(f, "Page {page} failed after all retries: {last}")
            }
        }
    }
}

impl Error for FetchError {}
