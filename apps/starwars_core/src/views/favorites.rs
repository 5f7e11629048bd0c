use axum::{extract::State, http::StatusCode, Json};

use crate::errors::ApiResult;
use crate::extract::ApiJson;
use crate::models::{favorite_people, favorite_planets, favorite_users};
use crate::serializers::favorites::{
    FavoritePeopleCreateReq, FavoritePlanetsCreateReq, FavoriteUsersCreateReq,
};
use crate::AppState;

pub async fn create_users(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FavoriteUsersCreateReq>,
) -> ApiResult<(StatusCode, Json<favorite_users::Model>)> {
    let created = state.store.create_favorite_users(req.validate()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn create_people(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FavoritePeopleCreateReq>,
) -> ApiResult<(StatusCode, Json<favorite_people::Model>)> {
    let created = state.store.create_favorite_people(req.validate()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn create_planets(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<FavoritePlanetsCreateReq>,
) -> ApiResult<(StatusCode, Json<favorite_planets::Model>)> {
    let created = state.store.create_favorite_planets(req.validate()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
