//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Host identity of this instance, resolved once at startup.
///
/// Orchestrators surface the pod name as the container hostname, so this is
/// what identifies the serving instance in logs and responses. The value is
/// immutable for the process lifetime, so handlers read it without
/// re-querying the OS on every request.
#[derive(Debug, Clone)]
pub struct PodIdentity {
    pub hostname: String,
}

impl PodIdentity {
    /// Resolve the host identity from the OS.
    ///
    /// A hostname that is not valid UTF-8 degrades to an empty string rather
    /// than failing, since identity is informational only.
    pub fn resolve() -> Self {
        let hostname = gethostname::gethostname()
            .into_string()
            .unwrap_or_default();
        Self { hostname }
    }
}

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the host identity this
/// instance reports in greeting responses.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<PodIdentity>,
}

impl AppState {
    /// Creates a new application state from the given configuration and identity.
    pub fn new(config: AppConfig, identity: PodIdentity) -> Self {
        Self {
            config: Arc::new(config),
            identity: Arc::new(identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_matches_os_hostname() {
        let identity = PodIdentity::resolve();
        let expected = gethostname::gethostname().into_string().unwrap_or_default();
        assert_eq!(identity.hostname, expected);
    }

    #[test]
    fn state_is_cheaply_cloneable() {
        let state = AppState::new(AppConfig { port: 3000 }, PodIdentity::resolve());
        let clone = state.clone();
        assert_eq!(clone.config.port, state.config.port);
        assert_eq!(clone.identity.hostname, state.identity.hostname);
    }
}
