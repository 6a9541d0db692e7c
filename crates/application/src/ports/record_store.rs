use std::collections::HashMap;

/// Lookup/put/remove/list capability shared by the exact and wildcard stores.
///
/// Implementations synchronize internally; every method takes `&self`.
pub trait RecordStore: Send + Sync {
    /// Address mapped to `domain`, or `None`.
    fn lookup_ip(&self, domain: &str) -> Option<String>;

    /// Replace every mapping at once.
    fn init(&self, records: HashMap<String, String>);

    /// Upsert after trimming `domain`; empty keys are ignored.
    fn put(&self, domain: &str, ip: &str);

    /// Returns whether a mapping was removed.
    fn remove(&self, domain: &str) -> bool;

    /// Owned copy of every mapping.
    fn data(&self) -> HashMap<String, String>;

    fn size(&self) -> usize;

    fn name(&self) -> &str;
}
