#![warn(clippy::pedantic)]

pub mod json;
pub mod memory;

pub use json::JsonCatalog;
pub use memory::MemoryCatalog;
