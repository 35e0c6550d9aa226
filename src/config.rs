//! Configuration loading and constants.
//!
//! Configuration is read from the environment exactly once at startup and
//! frozen into an immutable `AppConfig`. The only recognized setting is the
//! listening port.

// =============================================================================
// Defaults and Fixed Strings
// =============================================================================

/// Default TCP port when PORT is unset, empty, or not a valid port number
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable holding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Address the listener binds to (all interfaces, for container networking)
pub const BIND_HOST: &str = "0.0.0.0";

/// Greeting message returned by `GET /`
pub const GREETING_MESSAGE: &str = "Hello from EKS Demo!";

/// Version string reported in the greeting payload
pub const APP_VERSION: &str = "1.0.0";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "eks_demo=info";

/// Application configuration, resolved once at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server listens on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// `PORT` falls back to [`DEFAULT_PORT`] when unset, empty, or not
    /// parseable as a port number. A numeric value of `0` is honored and
    /// asks the kernel for an ephemeral port.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var(PORT_ENV_VAR).ok().as_deref()),
        }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }
}

/// Resolve the listening port from an optional PORT value.
///
/// Unset and empty both fall back to the default, matching the usual
/// `PORT || 3000` contract of container demo apps. Values that do not parse
/// as a u16 also fall back rather than failing startup.
fn parse_port(value: Option<&str>) -> u16 {
    value
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
