//! HTTP adapter - axum routes, handlers, and DTOs for the payments API.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::payment_routes;
