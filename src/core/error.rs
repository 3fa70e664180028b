// Error handling for the Nexus plot reader

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NexError>;

#[derive(Error, Debug)]
pub enum NexError {
    #[error("Could not open file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad header: {0}")]
    BadHeader(String),

    #[error("Unexpected end of file at byte {offset} while reading {context}")]
    UnexpectedEof { offset: u64, context: &'static str },

    #[error("Unknown unit system: {0:?}")]
    UnknownUnitSystem(String),

    #[error("Class not in variable catalog: {0:?}")]
    UnknownClass(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported compression type: {0}")]
    UnsupportedCompression(String),

    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl NexError {
    pub(crate) fn bad_header(msg: &str) -> Self {
        NexError::BadHeader(msg.to_string())
    }
}
