use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub dns: DnsConfig,
    pub site: SiteConfig,
    pub logger: LoggerConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
    /// Exact origins allowed by CORS; an empty list permits any origin
    /// (development mode).
    pub cors_origins: Vec<String>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Root location of the site namespace (one directory per claimed name).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub sites_dir: PathBuf,
}

/// External DNS RRset API. `endpoint` and `token` are optional here so the
/// server can boot without DNS; the provisioner reports `ConfigMissing` at
/// call time when either is absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DnsConfig {
    /// Full URL of the RRset creation endpoint.
    pub endpoint: Option<String>,
    /// Bearer credential sent in the `Authorization` header.
    pub token: Option<String>,
    /// TTL applied to every created record.
    pub ttl: u32,
    /// Outbound request timeout.
    pub timeout_seconds: u64,
}

/// Provisioned-site parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Parent domain that claimed names are published under
    /// (`https://<name>.<parent_domain>`).
    pub parent_domain: String,
    /// Address every created A record points at. Required at startup;
    /// the server refuses to build without it.
    pub address: Option<IpAddr>,
}

/// Logger output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory for rolling log files; console-only when unset.
    pub path: Option<PathBuf>,
    pub level: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 4180,
            ssl: None,
            cors_origins: Vec::new(),
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { sites_dir: PathBuf::from("sites") }
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self { endpoint: None, token: None, ttl: 3600, timeout_seconds: 10 }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { parent_domain: "example.com".to_owned(), address: None }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { path: None, level: "info".to_owned() }
    }
}
