use axum::{extract::State, http::StatusCode, Json};

use crate::errors::ApiResult;
use crate::extract::{ApiJson, IdPath};
use crate::models::planets;
use crate::serializers::planets::{PlanetsCreateReq, PlanetsDetail};
use crate::AppState;

pub async fn detail(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> ApiResult<Json<PlanetsDetail>> {
    let planets = state.store.get::<planets::Entity>(id).await?;
    Ok(Json(PlanetsDetail { planets }))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PlanetsCreateReq>,
) -> ApiResult<(StatusCode, Json<planets::Model>)> {
    let created = state.store.create_planets(req.validate()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
