//! HTTP function host for the check-verify adapter
//!
//! Library exports for testing and for the binary in `main.rs`.

pub mod app;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::AppState;
