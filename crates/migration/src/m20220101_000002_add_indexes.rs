use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Project: index on site_id for site -> projects lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_project_site")
                    .table(Project::Table)
                    .col(Project::SiteId)
                    .to_owned(),
            )
            .await?;

        // Association: reverse lookup team member -> projects
        manager
            .create_index(
                Index::create()
                    .name("idx_ptm_team_member")
                    .table(ProjectTeamMember::Table)
                    .col(ProjectTeamMember::TeamMemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_project_site").table(Project::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_ptm_team_member").table(ProjectTeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Project { Table, SiteId }

#[derive(DeriveIden)]
enum ProjectTeamMember { Table, TeamMemberId }
