use smint_domain::config::{ApiConfig, DnsConfig, ServerConfig, SiteConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4180);
    assert!(server.ssl.is_none());
    assert!(server.cors_origins.is_empty());

    let storage = StorageConfig::default();
    assert_eq!(storage.sites_dir, std::path::PathBuf::from("sites"));

    let dns = DnsConfig::default();
    assert!(dns.endpoint.is_none());
    assert_eq!(dns.ttl, 3600);
    assert_eq!(dns.timeout_seconds, 10);

    let site = SiteConfig::default();
    assert_eq!(site.parent_domain, "example.com");
    assert!(site.address.is_none(), "site address must be explicit configuration");
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080, "cors_origins": ["https://example.com"] },
        "storage": { "sites_dir": "/tmp/sites" },
        "dns": { "endpoint": "https://dns.example.com/api/rrsets", "token": "secret", "ttl": 600 },
        "site": { "parent_domain": "sites.example.com", "address": "203.0.113.7" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.sites_dir, std::path::PathBuf::from("/tmp/sites"));
    assert_eq!(cfg.dns.ttl, 600);
    assert_eq!(cfg.dns.timeout_seconds, 10, "unset fields keep their defaults");
    assert_eq!(cfg.site.parent_domain, "sites.example.com");
    assert_eq!(cfg.site.address, Some("203.0.113.7".parse().unwrap()));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.server.port, 4180);
    assert!(cfg.dns.endpoint.is_none());
}
