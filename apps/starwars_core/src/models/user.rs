use sea_orm::entity::prelude::*;

/// No `Serialize` here: rows leave the crate as `UserPublic`, which has no
/// password field.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub email: String,

    pub password: String,

    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_users::Entity")]
    FavoriteUsers,
    #[sea_orm(has_many = "super::favorite_people::Entity")]
    FavoritePeople,
    #[sea_orm(has_many = "super::favorite_planets::Entity")]
    FavoritePlanets,
}

impl Related<super::favorite_people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePeople.def()
    }
}

impl Related<super::favorite_planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanets.def()
    }
}

impl Related<super::favorite_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
