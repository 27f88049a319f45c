//! End-to-end provisioning tests against a real store root and a loopback
//! DNS endpoint.

use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use smint_dns::DnsProvisioner;
use smint_sites::workflow::{self, NewSite};
use smint_sites::{SiteError, Sites, SitesInner, validator};
use smint_storage::SiteStore;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

const SITE_IP: &str = "203.0.113.7";

type DnsHits = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

/// Spawns a one-route DNS stub that records every request and answers with
/// a fixed status. Returns the endpoint URL and the captured requests.
async fn spawn_dns_stub(status: StatusCode) -> (String, DnsHits) {
    let hits: DnsHits = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&hits);

    let app = axum::Router::new().route(
        "/rrsets",
        post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
            let recorded = Arc::clone(&recorded);
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                recorded.lock().unwrap().push((auth, body));
                status
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/rrsets"), hits)
}

async fn store_in(dir: &tempfile::TempDir) -> SiteStore {
    SiteStore::builder().root(dir.path().join("sites")).connect().await.unwrap()
}

fn sites_with(endpoint: &str) -> Sites {
    let dns = DnsProvisioner::builder().endpoint(endpoint).token("secret").build().unwrap();
    let address: IpAddr = SITE_IP.parse().unwrap();
    Sites::new(SitesInner { dns, parent_domain: "sites.test".to_owned(), address })
}

fn new_site(name: &str) -> NewSite {
    NewSite {
        site_name: name.to_owned(),
        description: Some("A freshly minted site".to_owned()),
        style: Some("light".to_owned()),
        initial_content: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn provision_claims_persists_and_creates_dns() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let (endpoint, hits) = spawn_dns_stub(StatusCode::CREATED).await;
    let sites = sites_with(&endpoint);

    let provisioned = workflow::provision(&sites, &store, new_site("My-Site")).await.unwrap();

    // Name is normalized and the URL is under the configured parent domain.
    assert_eq!(provisioned.name.as_str(), "my-site");
    assert_eq!(provisioned.site_url, "https://my-site.sites.test");
    assert!(store.exists("my-site").unwrap());

    // The persisted record carries the normalized name and a timestamp.
    let record: serde_json::Value =
        serde_json::from_slice(&store.read_record("my-site").await.unwrap()).unwrap();
    assert_eq!(record["siteName"], "my-site");
    assert_eq!(record["description"], "A freshly minted site");
    assert_eq!(record["style"], "light");
    assert!(record.get("initialContent").is_none());
    assert!(record.get("createdAt").is_some());

    // Exactly one authenticated RRset request with the expected shape.
    let requests = hits.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("secret"));
    assert_eq!(
        *body,
        serde_json::json!({
            "subname": "my-site",
            "type": "A",
            "ttl": 3600,
            "records": [SITE_IP],
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn dns_rejection_does_not_fail_provisioning() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let (endpoint, hits) = spawn_dns_stub(StatusCode::BAD_REQUEST).await;
    let sites = sites_with(&endpoint);

    let provisioned = workflow::provision(&sites, &store, new_site("my-site")).await.unwrap();

    assert_eq!(provisioned.site_url, "https://my-site.sites.test");
    assert_eq!(hits.lock().unwrap().len(), 1);

    // The claim and record both survive the failed DNS step.
    assert!(store.exists("my-site").unwrap());
    assert!(store.read_record("my-site").await.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn unconfigured_dns_degrades_to_claim_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let dns = DnsProvisioner::builder().build().unwrap();
    let sites = Sites::new(SitesInner {
        dns,
        parent_domain: "sites.test".to_owned(),
        address: SITE_IP.parse().unwrap(),
    });

    let provisioned = workflow::provision(&sites, &store, new_site("my-site")).await.unwrap();

    assert_eq!(provisioned.site_url, "https://my-site.sites.test");
    assert!(store.exists("my-site").unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn second_provision_of_the_same_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let (endpoint, hits) = spawn_dns_stub(StatusCode::CREATED).await;
    let sites = sites_with(&endpoint);

    workflow::provision(&sites, &store, new_site("my-site")).await.unwrap();

    let err = workflow::provision(&sites, &store, new_site("MY-SITE")).await.unwrap_err();
    assert!(err.is_user_error());
    assert_eq!(err.to_string(), "site name already exists");

    // The rejected attempt never reached DNS.
    assert_eq!(hits.lock().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn reserved_and_malformed_names_never_touch_the_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;
    let (endpoint, hits) = spawn_dns_stub(StatusCode::CREATED).await;
    let sites = sites_with(&endpoint);

    let err = workflow::provision(&sites, &store, new_site("api")).await.unwrap_err();
    assert!(err.is_user_error());
    assert_eq!(err.to_string(), "site name is reserved or forbidden");

    let err = workflow::provision(&sites, &store, new_site("-bad-")).await.unwrap_err();
    assert!(err.is_user_error());

    assert!(hits.lock().unwrap().is_empty());
    let entries: Vec<_> = std::fs::read_dir(store.root()).unwrap().collect();
    assert!(entries.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn validator_reflects_the_live_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir).await;

    let name = validator::validate(&store, "Fresh-Name").unwrap();
    assert_eq!(name.as_str(), "fresh-name");

    store.claim("fresh-name").await.unwrap();

    let err = validator::validate(&store, "fresh-name").unwrap_err();
    assert!(matches!(err, SiteError::AlreadyExists));
    assert_eq!(err.to_string(), "site name already exists");
}
