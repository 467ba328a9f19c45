//! Association rows for the project <-> team member many-to-many relation.
//!
//! Rows are managed explicitly by the service layer; nothing here cascades
//! in memory.
use sea_orm::{entity::prelude::*, sea_query::OnConflict, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, project, team_member};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_team_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_member_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Project, TeamMember }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Project => Entity::belongs_to(project::Entity)
                .from(Column::ProjectId)
                .to(project::Column::ProjectId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::TeamMember => Entity::belongs_to(team_member::Entity)
                .from(Column::TeamMemberId)
                .to(team_member::Column::TeamMemberId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<project::Entity> for Entity {
    fn to() -> RelationDef { Relation::Project.def() }
}

impl Related<team_member::Entity> for Entity {
    fn to() -> RelationDef { Relation::TeamMember.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Add `team_member_id` to the member set of `project_id`; a no-op when already linked.
/// Returns whether a row was inserted.
pub async fn link<C: ConnectionTrait>(conn: &C, project_id: i32, team_member_id: i32) -> Result<bool, errors::ModelError> {
    let am = ActiveModel { project_id: Set(project_id), team_member_id: Set(team_member_id) };
    // 冲突即已关联，单条语句完成，避免并发下的主键冲突
    let res = Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::ProjectId, Column::TeamMemberId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await;
    match res {
        Ok(rows) => Ok(rows > 0),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Remove a team member from every project it is staffed on.
pub async fn unlink_team_member<C: ConnectionTrait>(conn: &C, team_member_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::TeamMemberId.eq(team_member_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Empty the member set of the given projects.
pub async fn unlink_projects<C: ConnectionTrait>(conn: &C, project_ids: &[i32]) -> Result<u64, errors::ModelError> {
    if project_ids.is_empty() {
        return Ok(0);
    }
    let res = Entity::delete_many()
        .filter(Column::ProjectId.is_in(project_ids.iter().copied()))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Number of association rows referencing `team_member_id`.
pub async fn count_for_team_member<C: ConnectionTrait>(conn: &C, team_member_id: i32) -> Result<u64, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::TeamMemberId.eq(team_member_id))
        .count(conn)
        .await?)
}
