use crate::server::{
    data::group::GroupRepository,
    model::group::{GroupRecord, GroupsFilter},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_filter;
mod update;
