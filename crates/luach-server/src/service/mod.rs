//! Storage service: trait, in-memory and file-backed implementations, seed.

pub mod file;
pub mod seed;
pub mod storage;

pub use file::FileStore;
pub use storage::{MemStore, Storage, StorageError};
