use relaydns_application::use_cases::CacheSnapshot;
use relaydns_domain::CacheRecord;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CacheRecordDto {
    pub domain: String,
    pub ip: String,
}

impl From<CacheRecord> for CacheRecordDto {
    fn from(record: CacheRecord) -> Self {
        Self {
            domain: record.domain,
            ip: record.ip,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheSnapshotResponse {
    pub backend: String,
    pub upstream: String,
    pub size: usize,
    pub records: Vec<CacheRecordDto>,
    pub wildcard: Vec<CacheRecordDto>,
    pub black_domains: Vec<String>,
}

impl From<CacheSnapshot> for CacheSnapshotResponse {
    fn from(snapshot: CacheSnapshot) -> Self {
        Self {
            backend: snapshot.backend,
            upstream: snapshot.upstream,
            size: snapshot.size,
            records: snapshot.records.into_iter().map(Into::into).collect(),
            wildcard: snapshot.wildcard.into_iter().map(Into::into).collect(),
            black_domains: snapshot.black_domains,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
}
