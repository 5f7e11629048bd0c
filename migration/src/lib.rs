use sea_orm_migration::prelude::*;

mod m2026_10_16_000001_create_catalog;
mod m2026_10_16_000002_create_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // favorites reference users/people/planets, so the catalog goes first
            Box::new(m2026_10_16_000001_create_catalog::Migration),
            Box::new(m2026_10_16_000002_create_favorites::Migration),
        ]
    }
}
