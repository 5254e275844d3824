//! Transcoders from parsed JSON values to other text formats.

pub mod toml;
pub mod yaml;
