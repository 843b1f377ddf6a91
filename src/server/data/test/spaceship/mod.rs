use crate::server::{data::spaceship::SpaceshipRepository, model::spaceship::CreateSpaceshipParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
