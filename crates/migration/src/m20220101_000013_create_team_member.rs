use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::TeamMemberId))
                    .col(string_len_null(TeamMember::TeamMemberRole, 255))
                    .col(string_len_null(TeamMember::TeamMemberName, 255))
                    .col(string_len_null(TeamMember::TeamMemberPhone, 255))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TeamMember::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TeamMember { Table, TeamMemberId, TeamMemberRole, TeamMemberName, TeamMemberPhone }
