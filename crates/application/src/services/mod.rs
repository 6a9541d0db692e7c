mod cache_registry;
mod cache_seeder;

pub use cache_registry::CacheRegistry;
pub use cache_seeder::seed_cache;
