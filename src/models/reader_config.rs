use serde::{Deserialize, Serialize};

use crate::core::constants::{CompressionType, DEFAULT_BUFFER_CAPACITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    #[default]
    Auto,
    None,
    Gzip,
    Zlib,
    Zstd,
    Lz4,
}

impl CompressionMode {
    /// The codec this mode pins, or `None` for `Auto`.
    pub fn fixed(&self) -> Option<CompressionType> {
        match self {
            CompressionMode::Auto => None,
            CompressionMode::None => Some(CompressionType::None),
            CompressionMode::Gzip => Some(CompressionType::Gzip),
            CompressionMode::Zlib => Some(CompressionType::Zlib),
            CompressionMode::Zstd => Some(CompressionType::Zstd),
            CompressionMode::Lz4 => Some(CompressionType::Lz4),
        }
    }
}

/// What to do with a data block whose class has no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownClassPolicy {
    /// Decode the block against an empty variable list (no records).
    #[default]
    Empty,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub compression: CompressionMode,
    pub unknown_class: UnknownClassPolicy,
    pub buffer_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            compression: CompressionMode::Auto,
            unknown_class: UnknownClassPolicy::Empty,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}
