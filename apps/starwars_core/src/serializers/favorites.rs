use serde::Deserialize;

use crate::errors::{ApiError, ApiResult};

fn required_id(field: &str, value: Option<i32>) -> ApiResult<i32> {
    value.ok_or_else(|| ApiError::missing(field))
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteUsersCreateReq {
    pub users_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoritePeopleCreateReq {
    pub users_id: Option<i32>,
    pub people_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoritePlanetsCreateReq {
    pub users_id: Option<i32>,
    pub planets_id: Option<i32>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewFavoriteUsers {
    pub users_id: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct NewFavoritePeople {
    pub users_id: i32,
    pub people_id: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct NewFavoritePlanets {
    pub users_id: i32,
    pub planets_id: i32,
}

impl FavoriteUsersCreateReq {
    pub fn validate(self) -> ApiResult<NewFavoriteUsers> {
        Ok(NewFavoriteUsers {
            users_id: required_id("users_id", self.users_id)?,
        })
    }
}

impl FavoritePeopleCreateReq {
    pub fn validate(self) -> ApiResult<NewFavoritePeople> {
        Ok(NewFavoritePeople {
            users_id: required_id("users_id", self.users_id)?,
            people_id: required_id("people_id", self.people_id)?,
        })
    }
}

impl FavoritePlanetsCreateReq {
    pub fn validate(self) -> ApiResult<NewFavoritePlanets> {
        Ok(NewFavoritePlanets {
            users_id: required_id("users_id", self.users_id)?,
            planets_id: required_id("planets_id", self.planets_id)?,
        })
    }
}
