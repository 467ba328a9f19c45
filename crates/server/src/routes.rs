pub mod sites;

use axum::{routing::{get, post, put}, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{openapi::ApiDoc, state::ServerState};

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, the OpenAPI document and the `/site` resources.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    // 静态段优先于参数段匹配，/site/project 不会落入 /site/:siteId
    let site_routes = Router::new()
        .route("/site", get(sites::retrieve_all_sites).post(sites::create_site))
        .route("/site/project", get(sites::retrieve_all_projects))
        .route("/site/teamMember", get(sites::retrieve_all_team_members))
        .route(
            "/site/:siteId",
            get(sites::retrieve_site).put(sites::update_site).delete(sites::delete_site),
        )
        .route("/site/:siteId/project", post(sites::add_project))
        .route(
            "/site/:siteId/project/:projectId",
            put(sites::update_project).delete(sites::delete_project),
        )
        .route("/site/project/:projectId", get(sites::retrieve_project))
        .route("/site/project/:projectId/teamMember", post(sites::add_team_member))
        .route(
            "/site/project/:projectId/teamMember/:teamMemberId",
            put(sites::update_team_member).delete(sites::delete_team_member),
        )
        .route("/site/teamMember/:teamMemberId", get(sites::retrieve_team_member))
        .with_state(state);

    public
        .merge(site_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
