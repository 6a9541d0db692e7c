pub mod blacklist;
pub mod dns;
pub mod records;

pub use blacklist::{AddBlackDomainUseCase, RemoveBlackDomainUseCase};
pub use dns::{QueryOutcome, Resolution, ResolutionSource, ResolveQueryUseCase};
pub use records::{
    AddRecordUseCase, CacheSnapshot, GetCacheSnapshotUseCase, RemoveRecordUseCase,
};
