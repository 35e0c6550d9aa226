//! EKS demo service library.
//!
//! A minimal HTTP workload for verifying container-orchestration behavior:
//! one liveness probe and one greeting endpoint that reports which pod
//! served the request. The modules are exposed so integration tests can
//! assemble the router against a real listener.

pub mod config;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use routes::create_router;
pub use state::{AppState, PodIdentity};
