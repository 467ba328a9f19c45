use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDataDoc {
    pub team_member_id: Option<i32>,
    pub team_member_role: Option<String>,
    pub team_member_name: Option<String>,
    pub team_member_phone: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDataDoc {
    pub project_id: Option<i32>,
    pub project_name: Option<String>,
    pub project_length: Option<String>,
    pub project_type: Option<String>,
    pub team_members: Vec<TeamMemberDataDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteDataDoc {
    pub site_id: Option<i32>,
    pub site_name: Option<String>,
    pub site_address: Option<String>,
    pub site_state: Option<String>,
    pub site_zip: Option<String>,
    pub site_phone: Option<String>,
    pub projects: Vec<ProjectDataDoc>,
}

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sites::create_site,
        crate::routes::sites::update_site,
        crate::routes::sites::retrieve_all_sites,
        crate::routes::sites::retrieve_site,
        crate::routes::sites::delete_site,
        crate::routes::sites::add_project,
        crate::routes::sites::update_project,
        crate::routes::sites::retrieve_all_projects,
        crate::routes::sites::retrieve_project,
        crate::routes::sites::delete_project,
        crate::routes::sites::add_team_member,
        crate::routes::sites::update_team_member,
        crate::routes::sites::retrieve_all_team_members,
        crate::routes::sites::retrieve_team_member,
        crate::routes::sites::delete_team_member,
    ),
    components(
        schemas(
            HealthResponse,
            SiteDataDoc,
            ProjectDataDoc,
            TeamMemberDataDoc,
            MessageResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "site"),
        (name = "project"),
        (name = "teamMember")
    )
)]
pub struct ApiDoc;
