use crate::server::{data::planet::PlanetRepository, model::planet::CreatePlanetParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod get_by_ids;
