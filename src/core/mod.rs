//! Core utilities for the FPL league client
//!
//! This module consolidates local state that outlives a single run:
//! - `cache`: key-value persistence on the file system
//! - `history`: recently viewed leagues

pub mod cache;
pub mod history;

// Re-export commonly used items for convenience
pub use cache::{data_dir, try_read_to_string, write_string, FileStore, KeyValueStore, MemoryStore};
pub use history::{HistoryEntry, HistoryStore, HISTORY_KEY, MAX_HISTORY};
