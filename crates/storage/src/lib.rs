#![forbid(unsafe_code)]

pub mod repository;
pub mod snapshot;
pub mod sqlite;

pub use repository::{InMemorySnapshotStore, PROGRESS_SNAPSHOT_KEY, SnapshotStore, StorageError};
pub use snapshot::{decode_snapshot, encode_snapshot};
