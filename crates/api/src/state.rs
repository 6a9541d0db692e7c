use relaydns_application::ports::DnsCache;
use relaydns_application::use_cases::{
    AddBlackDomainUseCase, AddRecordUseCase, GetCacheSnapshotUseCase, RemoveBlackDomainUseCase,
    RemoveRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_snapshot: Arc<GetCacheSnapshotUseCase>,
    pub add_record: Arc<AddRecordUseCase>,
    pub remove_record: Arc<RemoveRecordUseCase>,
    pub add_black: Arc<AddBlackDomainUseCase>,
    pub remove_black: Arc<RemoveBlackDomainUseCase>,
}

impl AppState {
    /// Wire every admin use case to the same cache instance.
    pub fn new(cache: Arc<dyn DnsCache>, upstream: impl Into<String>) -> Self {
        Self {
            get_snapshot: Arc::new(GetCacheSnapshotUseCase::new(cache.clone(), upstream)),
            add_record: Arc::new(AddRecordUseCase::new(cache.clone())),
            remove_record: Arc::new(RemoveRecordUseCase::new(cache.clone())),
            add_black: Arc::new(AddBlackDomainUseCase::new(cache.clone())),
            remove_black: Arc::new(RemoveBlackDomainUseCase::new(cache)),
        }
    }
}
