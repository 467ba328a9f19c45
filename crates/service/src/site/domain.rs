//! Transfer representations exposed at the API boundary.
//!
//! Field names serialize in camelCase; absent fields read as null and absent
//! collections as empty.

use serde::{Deserialize, Serialize};

use models::{project, site, team_member};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub site_id: Option<i32>,
    pub site_name: Option<String>,
    pub site_address: Option<String>,
    pub site_state: Option<String>,
    pub site_zip: Option<String>,
    pub site_phone: Option<String>,
    #[serde(default)]
    pub projects: Vec<ProjectData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub project_id: Option<i32>,
    pub project_name: Option<String>,
    pub project_length: Option<String>,
    pub project_type: Option<String>,
    #[serde(default)]
    pub team_members: Vec<TeamMemberData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberData {
    pub team_member_id: Option<i32>,
    pub team_member_role: Option<String>,
    pub team_member_name: Option<String>,
    pub team_member_phone: Option<String>,
}

impl SiteData {
    pub fn from_parts(site: site::Model, projects: Vec<ProjectData>) -> Self {
        Self {
            site_id: Some(site.site_id),
            site_name: site.site_name,
            site_address: site.site_address,
            site_state: site.site_state,
            site_zip: site.site_zip,
            site_phone: site.site_phone,
            projects,
        }
    }

    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        site::validate_fields(
            self.site_name.as_deref(),
            self.site_address.as_deref(),
            self.site_state.as_deref(),
            self.site_zip.as_deref(),
            self.site_phone.as_deref(),
        )
    }
}

impl ProjectData {
    pub fn from_parts(project: project::Model, members: Vec<team_member::Model>) -> Self {
        Self {
            project_id: Some(project.project_id),
            project_name: project.project_name,
            project_length: project.project_length,
            project_type: project.project_type,
            team_members: members.into_iter().map(TeamMemberData::from).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        project::validate_fields(
            self.project_name.as_deref(),
            self.project_length.as_deref(),
            self.project_type.as_deref(),
        )
    }
}

impl TeamMemberData {
    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        team_member::validate_fields(
            self.team_member_role.as_deref(),
            self.team_member_name.as_deref(),
            self.team_member_phone.as_deref(),
        )
    }
}

impl From<team_member::Model> for TeamMemberData {
    fn from(m: team_member::Model) -> Self {
        Self {
            team_member_id: Some(m.team_member_id),
            team_member_role: m.team_member_role,
            team_member_name: m.team_member_name,
            team_member_phone: m.team_member_phone,
        }
    }
}
