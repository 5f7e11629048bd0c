use sea_orm_migration::prelude::*;

/// Table: favorite_users (FK -> users)
#[derive(DeriveIden)]
enum FavoriteUsers {
    Table,
    Id,
    UsersId,
}

/// Table: favorite_people (FK -> users, people)
#[derive(DeriveIden)]
enum FavoritePeople {
    Table,
    Id,
    UsersId,
    PeopleId,
}

/// Table: favorite_planets (FK -> users, planets)
#[derive(DeriveIden)]
enum FavoritePlanets {
    Table,
    Id,
    UsersId,
    PlanetsId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_col<T: IntoIden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn references<T: IntoIden + 'static>(name: &str, table: T, col: T, target: &str) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Alias::new(target), Alias::new("id"))
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteUsers::Table)
                    .if_not_exists()
                    .col(&mut id_col(FavoriteUsers::Id))
                    .col(ColumnDef::new(FavoriteUsers::UsersId).integer().not_null())
                    .foreign_key(&mut references(
                        "fk_favorite_users_user",
                        FavoriteUsers::Table,
                        FavoriteUsers::UsersId,
                        "users",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritePeople::Table)
                    .if_not_exists()
                    .col(&mut id_col(FavoritePeople::Id))
                    .col(ColumnDef::new(FavoritePeople::UsersId).integer().not_null())
                    .col(ColumnDef::new(FavoritePeople::PeopleId).integer().not_null())
                    .foreign_key(&mut references(
                        "fk_favorite_people_user",
                        FavoritePeople::Table,
                        FavoritePeople::UsersId,
                        "users",
                    ))
                    .foreign_key(&mut references(
                        "fk_favorite_people_people",
                        FavoritePeople::Table,
                        FavoritePeople::PeopleId,
                        "people",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanets::Table)
                    .if_not_exists()
                    .col(&mut id_col(FavoritePlanets::Id))
                    .col(ColumnDef::new(FavoritePlanets::UsersId).integer().not_null())
                    .col(ColumnDef::new(FavoritePlanets::PlanetsId).integer().not_null())
                    .foreign_key(&mut references(
                        "fk_favorite_planets_user",
                        FavoritePlanets::Table,
                        FavoritePlanets::UsersId,
                        "users",
                    ))
                    .foreign_key(&mut references(
                        "fk_favorite_planets_planet",
                        FavoritePlanets::Table,
                        FavoritePlanets::PlanetsId,
                        "planets",
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            FavoritePlanets::Table.into_iden(),
            FavoritePeople::Table.into_iden(),
            FavoriteUsers::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}
