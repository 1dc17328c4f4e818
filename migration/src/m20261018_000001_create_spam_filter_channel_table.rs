use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpamFilterChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(SpamFilterChannel::Id))
                    .col(string(SpamFilterChannel::GuildId))
                    .col(string_uniq(SpamFilterChannel::ChannelId))
                    .col(string(SpamFilterChannel::EnabledBy))
                    .col(timestamp(SpamFilterChannel::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spam_filter_channel_guild_id")
                    .table(SpamFilterChannel::Table)
                    .col(SpamFilterChannel::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_spam_filter_channel_guild_id")
                    .table(SpamFilterChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SpamFilterChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpamFilterChannel {
    Table,
    Id,
    GuildId,
    ChannelId,
    EnabledBy,
    CreatedAt,
}
