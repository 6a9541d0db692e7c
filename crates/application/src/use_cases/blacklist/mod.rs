pub mod add;
pub mod remove;

pub use add::AddBlackDomainUseCase;
pub use remove::RemoveBlackDomainUseCase;
