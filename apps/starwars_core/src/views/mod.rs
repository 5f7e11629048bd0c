pub mod favorites;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod user;

use axum::{extract::State, Json};
use sea_orm::PrimaryKeyTrait;
use serde::Serialize;

use crate::errors::ApiResult;
use crate::extract::IdPath;
use crate::models::Resource;
use crate::AppState;

/// `GET /<collection>` for any entity whose row is its public form.
pub async fn list<E>(State(state): State<AppState>) -> ApiResult<Json<Vec<E::Model>>>
where
    E: Resource,
    E::Model: Serialize,
{
    Ok(Json(state.store.list::<E>().await?))
}

/// `DELETE /<collection>/{id}`, answering with the removed row.
pub async fn destroy<E>(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> ApiResult<Json<E::Model>>
where
    E: Resource,
    E::Model: Serialize,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(Json(state.store.delete::<E>(id).await?))
}
