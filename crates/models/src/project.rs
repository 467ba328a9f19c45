use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::{errors, fields::validate_text, project_team_member, site, team_member};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub project_id: i32,
    pub project_name: Option<String>,
    pub project_length: Option<String>,
    pub project_type: Option<String>,
    pub site_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Site, ProjectTeamMember }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Site => Entity::belongs_to(site::Entity)
                .from(Column::SiteId)
                .to(site::Column::SiteId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::ProjectTeamMember => Entity::has_many(project_team_member::Entity).into(),
        }
    }
}

impl Related<site::Entity> for Entity {
    fn to() -> RelationDef { Relation::Site.def() }
}

impl Related<project_team_member::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProjectTeamMember.def() }
}

impl Related<team_member::Entity> for Entity {
    fn to() -> RelationDef { project_team_member::Relation::TeamMember.def() }
    fn via() -> Option<RelationDef> { Some(project_team_member::Relation::Project.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_fields(
    name: Option<&str>,
    length: Option<&str>,
    kind: Option<&str>,
) -> Result<(), errors::ModelError> {
    validate_text("projectName", name)?;
    validate_text("projectLength", length)?;
    validate_text("projectType", kind)?;
    Ok(())
}

/// All projects ordered by id.
pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::ProjectId).all(conn).await?)
}

/// Projects owned by `site_id`, ordered by id.
pub async fn list_by_site<C: ConnectionTrait>(conn: &C, site_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::SiteId.eq(site_id))
        .order_by_asc(Column::ProjectId)
        .all(conn)
        .await?)
}
