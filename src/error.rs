use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    Structural { rule: String, missing: &'static str },
    Extraction { rule: String },
    Validation { expected: String },
    Transport { url: String, message: String },
    InvalidHeader(String),
    ReqwestError(reqwest::Error),
    IoError(io::Error),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Structural { rule, missing } => {
                write!(f, "{} was not set up correctly: missing {}", rule, missing)
            }
            Error::Extraction { rule } => write!(f, "Processing failed for rule: \"{}\"", rule),
            Error::Validation { expected } => write!(
                f,
                "Validation failed. Couldn't find text in response: \"{}\"",
                expected
            ),
            Error::Transport { url, message } => write!(
                f,
                "Error encountered while downloading {}: {}",
                url, message
            ),
            Error::InvalidHeader(line) => write!(f, "Malformed header line: \"{}\"", line),
            Error::ReqwestError(e) => write!(f, "reqwest error: {}", e),
            Error::IoError(e) => write!(f, "IoError: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ReqwestError(e)
    }
}
