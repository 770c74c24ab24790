use thiserror::Error;

use crate::asteroid::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u32 },
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed feed JSON")]
    Json(#[from] serde_json::Error),
    #[error("feed is not a JSON object")]
    NotObject,
    #[error("feed field {field} is not {expected}")]
    Shape { field: String, expected: &'static str },
    #[error("expected {expected} objects on {date}, found 0")]
    Missing { expected: i64, date: String },
    #[error("first object on the list cannot seed the scan")]
    Seed(#[source] ParseError),
}

// the three failure classes a run can end with
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Parsing,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } | Error::Status { .. } | Error::Io { .. } => {
                ErrorKind::Transport
            }
            Error::Json(_)
            | Error::NotObject
            | Error::Shape { .. }
            | Error::Missing { .. } => ErrorKind::Decode,
            Error::Seed(_) => ErrorKind::Parsing,
        }
    }
}
