//! # snvscore-serve
//!
//! The online half of snvscore: an HTTP service that scores one variant per
//! request. The genome provider and the model are loaded once at startup and
//! shared by every request through [`server::AppState`].
pub mod config;
pub mod handlers;
pub mod server;
pub mod types;

// re-exports
pub use config::ServiceConfig;
pub use server::{AppState, create_app, serve};
