use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;
use super::m20251210_000003_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerMember::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerMember::Id))
                    .col(integer(ServerMember::ServerId))
                    .col(integer(ServerMember::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_member_server_id")
                            .from(ServerMember::Table, ServerMember::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_member_user_id")
                            .from(ServerMember::Table, ServerMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_server_member_unique")
                            .col(ServerMember::ServerId)
                            .col(ServerMember::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerMember {
    Table,
    Id,
    ServerId,
    UserId,
}
