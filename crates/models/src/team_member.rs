use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{errors, fields::validate_text, project, project_team_member};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub team_member_id: i32,
    pub team_member_role: Option<String>,
    pub team_member_name: Option<String>,
    pub team_member_phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ProjectTeamMember }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProjectTeamMember => Entity::has_many(project_team_member::Entity).into(),
        }
    }
}

impl Related<project_team_member::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProjectTeamMember.def() }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { project_team_member::Relation::Project.def() }
    fn via() -> Option<RelationDef> { Some(project_team_member::Relation::TeamMember.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_fields(
    role: Option<&str>,
    name: Option<&str>,
    phone: Option<&str>,
) -> Result<(), errors::ModelError> {
    validate_text("teamMemberRole", role)?;
    validate_text("teamMemberName", name)?;
    validate_text("teamMemberPhone", phone)?;
    Ok(())
}

/// All team members ordered by id.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::TeamMemberId).all(conn).await?)
}

/// Members staffed on `project`, ordered by id.
pub async fn list_by_project<C: ConnectionTrait>(conn: &C, project: &project::Model) -> Result<Vec<Model>, errors::ModelError> {
    Ok(project
        .find_related(Entity)
        .order_by_asc(Column::TeamMemberId)
        .all(conn)
        .await?)
}
