pub mod admin;
pub mod cache;

pub use admin::{AddRecordForm, DomainQuery};
pub use cache::{CacheRecordDto, CacheSnapshotResponse, HealthResponse};
