use axum::{extract::State, http::StatusCode, Json};

use crate::errors::ApiResult;
use crate::extract::{ApiJson, IdPath};
use crate::models::people;
use crate::serializers::people::{PeopleCreateReq, PeopleDetail};
use crate::AppState;

pub async fn detail(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> ApiResult<Json<PeopleDetail>> {
    let people = state.store.get::<people::Entity>(id).await?;
    Ok(Json(PeopleDetail { people }))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PeopleCreateReq>,
) -> ApiResult<(StatusCode, Json<people::Model>)> {
    let created = state.store.create_people(req.validate()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
