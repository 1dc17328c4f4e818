use crate::{
    data::spam_filter_channel::SpamFilterChannelRepository,
    model::spam_filter::EnableSpamFilterParam,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_channel_id;
