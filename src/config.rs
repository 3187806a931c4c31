use crate::types::Environment;
use std::time::Duration;

pub const DEFAULT_GATEWAY_DOMAIN: &str = "oppwa.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static client settings. The per-request knob (test vs. live) lives on the
/// request types, not here.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Provider domain the environment subdomain is prefixed onto.
    pub domain: String,
    pub timeout_secs: u64,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            domain: std::env::var("OPPWA_GATEWAY_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_DOMAIN.to_string()),
            timeout_secs: std::env::var("OPPWA_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `https://{subdomain}.{domain}` for the requested environment.
    pub fn base_url(&self, environment: Environment) -> String {
        format!("https://{}.{}", environment.subdomain(), self.domain)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_GATEWAY_DOMAIN.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
