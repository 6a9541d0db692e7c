pub mod add;
pub mod remove;
pub mod snapshot;

pub use add::AddRecordUseCase;
pub use remove::RemoveRecordUseCase;
pub use snapshot::{CacheSnapshot, GetCacheSnapshotUseCase};
