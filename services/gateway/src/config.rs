use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub metrics_port: u16,
    pub backends: BackendsConfig,
}

/// Pre-resolved endpoints of the backend services.
///
/// Category and product live in the same catalog service.
#[derive(Debug, Clone)]
pub struct BackendsConfig {
    pub catalog: ServiceEndpoint,
    pub order: ServiceEndpoint,
    pub auth: ServiceEndpoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    /// URI handed to the gRPC transport
    pub fn uri(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            http_port: var("HTTP_PORT", "8080").parse()?,
            metrics_port: var("METRICS_PORT", "9090").parse()?,
            backends: BackendsConfig {
                catalog: ServiceEndpoint {
                    host: var("CATALOG_SERVICE_GRPC_HOST", "localhost"),
                    port: var("CATALOG_SERVICE_GRPC_PORT", "9001").parse()?,
                },
                order: ServiceEndpoint {
                    host: var("ORDER_SERVICE_GRPC_HOST", "localhost"),
                    port: var("ORDER_SERVICE_GRPC_PORT", "9002").parse()?,
                },
                auth: ServiceEndpoint {
                    host: var("AUTH_SERVICE_GRPC_HOST", "localhost"),
                    port: var("AUTH_SERVICE_GRPC_PORT", "9003").parse()?,
                },
            },
        })
    }
}
