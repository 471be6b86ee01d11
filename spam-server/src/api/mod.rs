//! HTTP API exposing evaluation results

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::{evaluate, evaluate_blocking, ApiServer};
