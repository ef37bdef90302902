use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Settings the HTTP layer needs before the server starts.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server = ServerConfig::from_env();
        tracing::debug!(address = %server.bind_address(), "server configuration loaded");

        Self {
            server,
            cors: cors_config::init_cors(),
        }
    }
}
