//! API layer - HTTP endpoints

pub mod beds;
pub mod health;
pub mod router;
pub mod state;
pub mod stay;
pub mod types;

pub use router::create_router;
pub use state::AppState;
