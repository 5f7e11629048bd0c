use axum::{extract::State, http::StatusCode, Json};

use crate::errors::ApiResult;
use crate::extract::{ApiJson, IdPath};
use crate::models::user;
use crate::serializers::user::{UserCreateReq, UserPublic};
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<UserPublic>>> {
    let users = state.store.list::<user::Entity>().await?;
    Ok(Json(users.into_iter().map(UserPublic::from).collect()))
}

pub async fn detail(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> ApiResult<Json<UserPublic>> {
    let found = state.store.get::<user::Entity>(id).await?;
    Ok(Json(found.into()))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UserCreateReq>,
) -> ApiResult<(StatusCode, Json<UserPublic>)> {
    let created = state.store.create_user(req.validate()?).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}
