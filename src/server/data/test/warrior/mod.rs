use crate::server::{data::warrior::WarriorRepository, model::warrior::CreateWarriorParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
