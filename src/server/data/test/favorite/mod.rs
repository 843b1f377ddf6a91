use crate::server::{
    data::favorite::FavoriteRepository,
    model::favorite::{FavoriteItem, FavoriteTarget},
};
use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user_id;
mod get_by_user_ids;
