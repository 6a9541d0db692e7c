use super::RecordStore;

/// A cache backend: the exact-match store plus a blacklist and a wildcard
/// sibling store.
///
/// The `RecordStore` methods operate on the exact tier. The wildcard sibling is
/// only a `RecordStore`, so it cannot nest further.
pub trait DnsCache: RecordStore {
    /// Trims `domain`; empty values are ignored. Duplicates are kept.
    fn add_black_domain(&self, domain: &str);

    /// Removes the first equal entry only. Returns whether one was removed.
    fn remove_black_domain(&self, domain: &str) -> bool;

    fn list_black_domains(&self) -> Vec<String>;

    fn is_black_domain(&self, domain: &str) -> bool;

    fn wildcard_cache(&self) -> &dyn RecordStore;
}
