//! `/site` REST surface. Handlers only bind path and body and forward to
//! [`service::SiteService`]; on PUT the id from the URL replaces any id in the body.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use service::{ProjectData, SiteData, TeamMemberData};
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{ApiJson, ApiPath},
    state::ServerState,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn deleted(entity: &str, id: i32) -> Json<Self> {
        Json(Self { message: format!("Deletion of {} with ID={} was successful.", entity, id) })
    }
}

// ------------------------------------------------------------------ site

#[utoipa::path(
    post, path = "/site", tag = "site",
    request_body = crate::openapi::SiteDataDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SiteDataDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create_site(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<SiteData>,
) -> Result<(StatusCode, Json<SiteData>), JsonApiError> {
    info!(site = ?input, "creating site");
    let saved = state.sites.save_site(input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/site/{siteId}", tag = "site",
    params(("siteId" = i32, Path, description = "Site ID")),
    request_body = crate::openapi::SiteDataDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SiteDataDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_site(
    State(state): State<ServerState>,
    ApiPath(site_id): ApiPath<i32>,
    ApiJson(mut input): ApiJson<SiteData>,
) -> Result<Json<SiteData>, JsonApiError> {
    input.site_id = Some(site_id);
    info!(site = ?input, "updating site");
    Ok(Json(state.sites.save_site(input).await?))
}

#[utoipa::path(
    get, path = "/site", tag = "site",
    responses((status = 200, description = "OK", body = [crate::openapi::SiteDataDoc]))
)]
pub async fn retrieve_all_sites(State(state): State<ServerState>) -> Result<Json<Vec<SiteData>>, JsonApiError> {
    let list = state.sites.retrieve_all_sites().await?;
    info!(count = list.len(), "retrieved all sites");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/site/{siteId}", tag = "site",
    params(("siteId" = i32, Path, description = "Site ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SiteDataDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn retrieve_site(
    State(state): State<ServerState>,
    ApiPath(site_id): ApiPath<i32>,
) -> Result<Json<SiteData>, JsonApiError> {
    info!(site_id, "retrieving site");
    Ok(Json(state.sites.retrieve_site_by_id(site_id).await?))
}

#[utoipa::path(
    delete, path = "/site/{siteId}", tag = "site",
    params(("siteId" = i32, Path, description = "Site ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_site(
    State(state): State<ServerState>,
    ApiPath(site_id): ApiPath<i32>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    info!(site_id, "deleting site");
    state.sites.delete_site_by_id(site_id).await?;
    Ok(MessageResponse::deleted("Site", site_id))
}

// --------------------------------------------------------------- project

#[utoipa::path(
    post, path = "/site/{siteId}/project", tag = "project",
    params(("siteId" = i32, Path, description = "Owning site ID")),
    request_body = crate::openapi::ProjectDataDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProjectDataDoc),
        (status = 404, description = "Site Not Found")
    )
)]
pub async fn add_project(
    State(state): State<ServerState>,
    ApiPath(site_id): ApiPath<i32>,
    ApiJson(input): ApiJson<ProjectData>,
) -> Result<(StatusCode, Json<ProjectData>), JsonApiError> {
    info!(site_id, project = ?input, "adding project");
    let saved = state.sites.save_project(site_id, input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/site/{siteId}/project/{projectId}", tag = "project",
    params(
        ("siteId" = i32, Path, description = "Owning site ID"),
        ("projectId" = i32, Path, description = "Project ID")
    ),
    request_body = crate::openapi::ProjectDataDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProjectDataDoc),
        (status = 400, description = "Project belongs to another site"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_project(
    State(state): State<ServerState>,
    ApiPath((site_id, project_id)): ApiPath<(i32, i32)>,
    ApiJson(mut input): ApiJson<ProjectData>,
) -> Result<Json<ProjectData>, JsonApiError> {
    input.project_id = Some(project_id);
    info!(site_id, project = ?input, "updating project");
    Ok(Json(state.sites.save_project(site_id, input).await?))
}

#[utoipa::path(
    get, path = "/site/project", tag = "project",
    responses((status = 200, description = "OK", body = [crate::openapi::ProjectDataDoc]))
)]
pub async fn retrieve_all_projects(State(state): State<ServerState>) -> Result<Json<Vec<ProjectData>>, JsonApiError> {
    let list = state.sites.retrieve_all_projects().await?;
    info!(count = list.len(), "retrieved all projects");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/site/project/{projectId}", tag = "project",
    params(("projectId" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProjectDataDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn retrieve_project(
    State(state): State<ServerState>,
    ApiPath(project_id): ApiPath<i32>,
) -> Result<Json<ProjectData>, JsonApiError> {
    info!(project_id, "retrieving project");
    Ok(Json(state.sites.retrieve_project_by_id(project_id).await?))
}

/// The site segment of the path is informational; deletion is keyed on the project id alone.
#[utoipa::path(
    delete, path = "/site/{siteId}/project/{projectId}", tag = "project",
    params(
        ("siteId" = i32, Path, description = "Owning site ID"),
        ("projectId" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_project(
    State(state): State<ServerState>,
    ApiPath((_site_id, project_id)): ApiPath<(i32, i32)>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    info!(project_id, "deleting project");
    state.sites.delete_project_by_id(project_id).await?;
    Ok(MessageResponse::deleted("Project", project_id))
}

// ----------------------------------------------------------- team member

#[utoipa::path(
    post, path = "/site/project/{projectId}/teamMember", tag = "teamMember",
    params(("projectId" = i32, Path, description = "Project to staff")),
    request_body = crate::openapi::TeamMemberDataDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TeamMemberDataDoc),
        (status = 404, description = "Project Not Found")
    )
)]
pub async fn add_team_member(
    State(state): State<ServerState>,
    ApiPath(project_id): ApiPath<i32>,
    ApiJson(input): ApiJson<TeamMemberData>,
) -> Result<(StatusCode, Json<TeamMemberData>), JsonApiError> {
    info!(project_id, team_member = ?input, "adding team member");
    let saved = state.sites.save_team_member(project_id, input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/site/project/{projectId}/teamMember/{teamMemberId}", tag = "teamMember",
    params(
        ("projectId" = i32, Path, description = "Project to staff"),
        ("teamMemberId" = i32, Path, description = "Team member ID")
    ),
    request_body = crate::openapi::TeamMemberDataDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TeamMemberDataDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_team_member(
    State(state): State<ServerState>,
    ApiPath((project_id, team_member_id)): ApiPath<(i32, i32)>,
    ApiJson(mut input): ApiJson<TeamMemberData>,
) -> Result<Json<TeamMemberData>, JsonApiError> {
    input.team_member_id = Some(team_member_id);
    info!(project_id, team_member = ?input, "updating team member");
    Ok(Json(state.sites.save_team_member(project_id, input).await?))
}

#[utoipa::path(
    get, path = "/site/teamMember", tag = "teamMember",
    responses((status = 200, description = "OK", body = [crate::openapi::TeamMemberDataDoc]))
)]
pub async fn retrieve_all_team_members(State(state): State<ServerState>) -> Result<Json<Vec<TeamMemberData>>, JsonApiError> {
    let list = state.sites.retrieve_all_team_members().await?;
    info!(count = list.len(), "retrieved all team members");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/site/teamMember/{teamMemberId}", tag = "teamMember",
    params(("teamMemberId" = i32, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TeamMemberDataDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn retrieve_team_member(
    State(state): State<ServerState>,
    ApiPath(team_member_id): ApiPath<i32>,
) -> Result<Json<TeamMemberData>, JsonApiError> {
    info!(team_member_id, "retrieving team member");
    Ok(Json(state.sites.retrieve_team_member_by_id(team_member_id).await?))
}

#[utoipa::path(
    delete, path = "/site/project/{projectId}/teamMember/{teamMemberId}", tag = "teamMember",
    params(
        ("projectId" = i32, Path, description = "Project ID"),
        ("teamMemberId" = i32, Path, description = "Team member ID")
    ),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponseDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_team_member(
    State(state): State<ServerState>,
    ApiPath((_project_id, team_member_id)): ApiPath<(i32, i32)>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    info!(team_member_id, "deleting team member");
    state.sites.delete_team_member_by_id(team_member_id).await?;
    Ok(MessageResponse::deleted("team member", team_member_id))
}
