pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_planet_table;
mod m20251020_000003_create_spaceship_table;
mod m20251020_000004_create_warrior_table;
mod m20251020_000005_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_planet_table::Migration),
            Box::new(m20251020_000003_create_spaceship_table::Migration),
            Box::new(m20251020_000004_create_warrior_table::Migration),
            Box::new(m20251020_000005_create_favorite_table::Migration),
        ]
    }
}
