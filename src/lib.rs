// Nexus plot file reader
// Main library entry point

pub mod core;
pub mod models;
pub mod utils;

// Re-export main types
pub use crate::core::error::{NexError, Result};
pub use crate::core::format::{
    ClassName, FixedStr, Header, InstanceName, Plot, Record, TimeSeries, VarName, VariableCatalog,
};
pub use crate::core::reader::{load, load_file, NexReader};
pub use crate::core::unit_system::UnitSystem;
pub use crate::models::reader_config::{CompressionMode, ReaderConfig, UnknownClassPolicy};
