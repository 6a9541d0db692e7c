pub mod resolve_query;

pub use resolve_query::{QueryOutcome, Resolution, ResolutionSource, ResolveQueryUseCase};
