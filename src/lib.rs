//! Greeting and health endpoints for the AWS-native DevSecOps demo platform.
//!
//! The service sits behind an ALB that authenticates callers with OIDC and
//! forwards the resulting identity in a request header. `GET /` echoes a
//! sanitized copy of that identity with a greeting; `GET /healthz` answers
//! orchestrator probes.

pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
