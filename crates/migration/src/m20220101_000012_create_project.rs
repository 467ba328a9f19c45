//! Create `project` table with FK to `site`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::ProjectId))
                    .col(string_len_null(Project::ProjectName, 255))
                    .col(string_len_null(Project::ProjectLength, 255))
                    .col(string_len_null(Project::ProjectType, 255))
                    .col(integer(Project::SiteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_site")
                            .from(Project::Table, Project::SiteId)
                            .to(Site::Table, Site::SiteId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Project::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Project { Table, ProjectId, ProjectName, ProjectLength, ProjectType, SiteId }

#[derive(DeriveIden)]
enum Site { Table, SiteId }
