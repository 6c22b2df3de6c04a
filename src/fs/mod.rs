//! File System Module
//!
//! The virtual file store behind the simulated shell:
//! - types: Node model and FsError
//! - virtual_fs: the tree, current path and path algebra
//! - snapshot: JSON snapshot codec for persistence and export/import
//! - store: persistent key-value backends

pub mod types;
pub mod snapshot;
pub mod store;
pub mod virtual_fs;

pub use types::*;
pub use snapshot::{Snapshot, SnapshotInfo, SNAPSHOT_VERSION};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use virtual_fs::{normalize_path, VirtualFileSystem, DEFAULT_HOME, DEFAULT_STORAGE_KEY};
