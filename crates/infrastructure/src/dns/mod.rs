pub mod cache;
pub mod forwarding;
pub mod registry;
pub mod server;
pub mod wire_response;

pub use cache::{MemoryCache, MEMORY_BACKEND};
pub use forwarding::UpstreamForwarder;
pub use registry::default_registry;
pub use server::DnsServerHandler;
