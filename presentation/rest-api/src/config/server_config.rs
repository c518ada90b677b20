use std::env;

const DEFAULT_MAX_REQUEST_BYTES: usize = 8 * 1024 * 1024;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    /// Upper bound for request bodies, base64 image uploads included.
    pub max_request_bytes: usize,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    /// - MAX_REQUEST_BYTES: Request body limit in bytes (default: 8 MiB)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());
        let max_request_bytes = parse_max_request_bytes(env::var("MAX_REQUEST_BYTES").ok());

        Self {
            ip,
            port,
            max_request_bytes,
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_max_request_bytes(raw: Option<String>) -> usize {
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                "invalid MAX_REQUEST_BYTES {:?}, using {}",
                value,
                DEFAULT_MAX_REQUEST_BYTES
            );
            DEFAULT_MAX_REQUEST_BYTES
        }),
        None => DEFAULT_MAX_REQUEST_BYTES,
    }
}
