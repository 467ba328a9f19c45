//! Create `project_team_member` association table.
//! Composite primary key keeps a member listed at most once per project.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTeamMember::Table)
                    .if_not_exists()
                    .col(integer(ProjectTeamMember::ProjectId))
                    .col(integer(ProjectTeamMember::TeamMemberId))
                    .primary_key(
                        Index::create()
                            .name("pk_project_team_member")
                            .col(ProjectTeamMember::ProjectId)
                            .col(ProjectTeamMember::TeamMemberId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ptm_project")
                            .from(ProjectTeamMember::Table, ProjectTeamMember::ProjectId)
                            .to(Project::Table, Project::ProjectId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ptm_team_member")
                            .from(ProjectTeamMember::Table, ProjectTeamMember::TeamMemberId)
                            .to(TeamMember::Table, TeamMember::TeamMemberId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProjectTeamMember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProjectTeamMember { Table, ProjectId, TeamMemberId }

#[derive(DeriveIden)]
enum Project { Table, ProjectId }

#[derive(DeriveIden)]
enum TeamMember { Table, TeamMemberId }
