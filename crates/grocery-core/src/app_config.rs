use std::net::SocketAddr;

/// Credentials and endpoint settings for the Kroger API.
#[derive(Clone)]
pub struct KrogerConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub chain: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for KrogerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrogerConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("chain", &self.chain)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Settings for the HTTP server that re-exposes the Kroger queries.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Origin of the browser frontend, used as the only allowed CORS origin.
    pub app_url: String,
    pub log_level: String,
    pub kroger: KrogerConfig,
}
