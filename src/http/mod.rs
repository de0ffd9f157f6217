//! HTTP server module.
//!
//! Serves plain HTTP; TLS is terminated by the load balancer in front of the
//! service. The server drains in-flight requests on SIGTERM/SIGINT so rolling
//! deployments do not cut probes or greetings mid-response.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
