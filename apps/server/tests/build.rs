use smint::domain::config::ApiConfig;
use smint_server::Server;
use smint_sites::Sites;

fn test_config(dir: &tempfile::TempDir) -> ApiConfig {
    let mut cfg = ApiConfig::default();
    cfg.storage.sites_dir = dir.path().join("sites");
    cfg.site.address = Some("203.0.113.7".parse().unwrap());
    cfg
}

#[tokio::test]
async fn build_wires_state_and_registers_the_sites_slice() {
    let dir = tempfile::tempdir().unwrap();
    let server = Server::builder().config(test_config(&dir)).build().await.unwrap();

    let state = server.state();
    assert!(state.get_slice::<Sites>().is_some());
    assert!(state.store.root().exists());
}

#[tokio::test]
async fn build_fails_without_a_site_address() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = test_config(&dir);
    cfg.site.address = None;

    let err = Server::builder().config(cfg).build().await.unwrap_err();
    assert!(err.to_string().contains("bootstrap"));
}

#[tokio::test]
async fn build_fails_when_the_ssl_certificate_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = test_config(&dir);
    cfg.server.ssl = Some(smint::domain::config::SslConfig {
        cert: dir.path().join("absent.crt"),
        key: dir.path().join("absent.key"),
    });

    let err = Server::builder().config(cfg).build().await.unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}
