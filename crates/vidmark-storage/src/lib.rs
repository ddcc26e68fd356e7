//! Vidmark Storage Library
//!
//! This crate provides the single-slot video store abstraction and its local
//! filesystem implementation.
//!
//! # Slot layout
//!
//! The store holds at most one video at a time, as a file named
//! `{stem}.{extension}` inside the storage directory (stem is fixed to
//! `video`). Storing a new video overwrites the slot and removes any stale
//! file left from a previous upload with a different extension, so reads are
//! deterministic.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalSlotStore;
pub use traits::{SlotStore, StorageError, StorageResult, StoredVideo};

/// Fixed stem for the slot file.
pub const SLOT_STEM: &str = "video";
