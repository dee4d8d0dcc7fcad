#![warn(clippy::uninlined_format_args)]

pub mod file_store;

pub use file_store::JsonFileStore;
