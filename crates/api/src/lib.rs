pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_admin_routes;
pub use state::AppState;
