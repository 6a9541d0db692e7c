mod mock_cache;
mod mock_upstream;

pub use mock_cache::{MockDnsCache, MockRecordStore};
pub use mock_upstream::MockUpstream;
