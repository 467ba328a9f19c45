//! Create `site` table.
//!
//! Top-level physical location; owns projects.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(pk_auto(Site::SiteId))
                    .col(string_len_null(Site::SiteName, 255))
                    .col(string_len_null(Site::SiteAddress, 255))
                    .col(string_len_null(Site::SiteState, 255))
                    .col(string_len_null(Site::SiteZip, 255))
                    .col(string_len_null(Site::SitePhone, 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Site::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Site { Table, SiteId, SiteName, SiteAddress, SiteState, SiteZip, SitePhone }
