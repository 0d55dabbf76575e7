//! Droidgate HTTP server — axum routes, bearer auth, command dispatch.

pub mod auth;
pub mod error;
pub mod respond;
pub mod routes;
pub mod state;
pub mod validate;

pub use routes::build_router;
pub use state::AppState;
