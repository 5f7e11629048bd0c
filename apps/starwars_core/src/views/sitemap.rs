use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    Extension, Json,
};

use crate::errors::ApiError;
use crate::serializers::sitemap::Sitemap;

/// Route listing assembled by `urls::router` from the route table.
pub async fn sitemap(Extension(sitemap): Extension<Arc<Sitemap>>) -> Json<Sitemap> {
    Json(Sitemap::clone(&sitemap))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} not allowed on {}", uri.path()))
}
