pub mod admin;
pub mod cache;
pub mod health;

pub use cache::get_cache;
pub use health::health_check;
