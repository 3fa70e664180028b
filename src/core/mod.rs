pub mod compression;
pub mod constants;
pub mod error;
pub mod format;
pub mod reader;
pub mod stream;
pub mod unit_system;

#[cfg(test)]
pub(crate) mod testutil;
