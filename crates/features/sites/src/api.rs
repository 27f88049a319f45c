//! HTTP surface of the provisioning slice.
//!
//! User errors travel in normal `200` response bodies so the frontend can
//! show them inline; only server faults map to `500` with a generic message.

use crate::catalog::{self, Section, Theme};
use crate::workflow::{self, NewSite};
use crate::{Sites, error::SiteError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use smint_domain::constants::{CATALOG_TAG, SITES_TAG};
use smint_kernel::server::ApiState;
use smint_storage::SiteStore;
use tracing::error;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(validate_name_handler))
        .routes(routes!(create_site_handler))
        .routes(routes!(sections_handler))
        .routes(routes!(themes_handler))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct ValidateNameRequest {
    /// Candidate name; normalized to lowercase before validation.
    site_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct ValidateNameResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Checks whether a name could be claimed right now.
///
/// Purely advisory: a `valid: true` answer can be stale by the time the
/// caller provisions. The claim itself re-checks everything atomically.
#[utoipa::path(
    post,
    path = "/api/sites/validate-name",
    request_body = ValidateNameRequest,
    responses((status = OK, description = "Validation verdict", body = ValidateNameResponse)),
    tag = SITES_TAG,
)]
async fn validate_name_handler(
    State(store): State<SiteStore>,
    Json(req): Json<ValidateNameRequest>,
) -> Response {
    match crate::validator::validate(&store, &req.site_name) {
        Ok(_) => Json(ValidateNameResponse { valid: true, error: None }).into_response(),
        Err(err) if err.is_user_error() => {
            Json(ValidateNameResponse { valid: false, error: Some(err.to_string()) })
                .into_response()
        },
        Err(err) => internal_error(&err),
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct CreateSiteRequest {
    site_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    initial_content: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct CreateSiteResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Provisions a new site: claims the name, persists its record, and creates
/// the DNS entry best-effort.
#[utoipa::path(
    post,
    path = "/api/sites",
    request_body = CreateSiteRequest,
    responses(
        (status = OK, description = "Provisioning outcome", body = CreateSiteResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Storage failure"),
    ),
    tag = SITES_TAG,
)]
async fn create_site_handler(
    State(state): State<ApiState>,
    Json(req): Json<CreateSiteRequest>,
) -> Response {
    let sites = match state.try_get_slice::<Sites>() {
        Ok(sites) => sites,
        Err(err) => {
            error!(error = %err, "Sites slice not registered");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        },
    };

    let new = NewSite {
        site_name: req.site_name,
        description: req.description,
        style: req.style,
        initial_content: req.initial_content,
    };

    match workflow::provision(sites, &state.store, new).await {
        Ok(provisioned) => Json(CreateSiteResponse {
            success: true,
            site_url: Some(provisioned.site_url),
            error: None,
        })
        .into_response(),
        Err(err) if err.is_user_error() => Json(CreateSiteResponse {
            success: false,
            site_url: None,
            error: Some(err.to_string()),
        })
        .into_response(),
        Err(err) => internal_error(&err),
    }
}

/// Lists the composable page sections.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    path = "/api/sections",
    responses((status = OK, description = "Section catalog", body = [Section])),
    tag = CATALOG_TAG,
)]
async fn sections_handler() -> Json<&'static [Section]> {
    Json(catalog::SECTIONS)
}

/// Lists the available visual themes.
#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    path = "/api/themes",
    responses((status = OK, description = "Theme catalog", body = [Theme])),
    tag = CATALOG_TAG,
)]
async fn themes_handler() -> Json<&'static [Theme]> {
    Json(catalog::THEMES)
}

fn internal_error(err: &SiteError) -> Response {
    error!(error = %err, "Provisioning request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
