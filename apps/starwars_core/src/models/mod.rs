pub mod favorite_people;
pub mod favorite_planets;
pub mod favorite_users;
pub mod people;
pub mod planets;
pub mod user;

/// An entity addressable by an `i32` id, with a name for error messages.
pub trait Resource: sea_orm::EntityTrait {
    const KIND: &'static str;
}

impl Resource for user::Entity {
    const KIND: &'static str = "User";
}

impl Resource for people::Entity {
    const KIND: &'static str = "People";
}

impl Resource for planets::Entity {
    const KIND: &'static str = "Planets";
}

impl Resource for favorite_users::Entity {
    const KIND: &'static str = "Favorite_users";
}

impl Resource for favorite_people::Entity {
    const KIND: &'static str = "Favorite_people";
}

impl Resource for favorite_planets::Entity {
    const KIND: &'static str = "Favorite_planets";
}
