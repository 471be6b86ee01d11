//! spam-server: HTTP front end for the spam detector
//!
//! Trains and tests the detector once at startup from a data directory,
//! then serves the per-file results and the accuracy/precision summary
//! as JSON.
//!
//! # Endpoints
//!
//! - `GET /health`
//! - `GET /api/spam`: per-file results
//! - `GET /api/spam/accuracy`
//! - `GET /api/spam/precision`
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:8080"
//!
//! [data]
//! root = "/srv/spam-data"
//!
//! [logging]
//! level = "info"
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::{evaluate, evaluate_blocking, ApiServer};
pub use config::Config;
pub use error::{Result, ServerError};
