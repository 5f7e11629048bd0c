use std::sync::Arc;

use axum::{
    handler::Handler,
    http::Method,
    routing::{delete, get, post, MethodRouter},
    Extension, Router,
};

use crate::models::{favorite_people, favorite_planets, favorite_users, people, planets};
use crate::serializers::sitemap::{RouteEntry, Sitemap};
use crate::views::{self, favorites, sitemap, user};
use crate::AppState;

/// One registered method on one path. `path` uses `{id}` placeholders.
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    route: MethodRouter<AppState>,
}

fn endpoint<H, T>(method: Method, path: &'static str, handler: H) -> Endpoint
where
    H: Handler<T, AppState>,
    T: 'static,
{
    let route = match method {
        Method::POST => post(handler),
        Method::DELETE => delete(handler),
        _ => get(handler),
    };
    Endpoint {
        method,
        path,
        route,
    }
}

/// The single route table; both `router` and `GET /` are built from it.
pub fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(Method::GET, "/", sitemap::sitemap),
        endpoint(Method::GET, "/user", user::list),
        endpoint(Method::POST, "/user", user::create),
        endpoint(Method::GET, "/user/{id}", user::detail),
        endpoint(Method::GET, "/people", views::list::<people::Entity>),
        endpoint(Method::POST, "/people", views::people::create),
        endpoint(Method::GET, "/people/{id}", views::people::detail),
        endpoint(Method::GET, "/planets", views::list::<planets::Entity>),
        endpoint(Method::POST, "/planets", views::planets::create),
        endpoint(Method::GET, "/planets/{id}", views::planets::detail),
        endpoint(Method::GET, "/favorite_users", views::list::<favorite_users::Entity>),
        endpoint(Method::POST, "/favorite/users", favorites::create_users),
        endpoint(
            Method::DELETE,
            "/favorite/users/{id}",
            views::destroy::<favorite_users::Entity>,
        ),
        endpoint(Method::GET, "/favorite_people", views::list::<favorite_people::Entity>),
        endpoint(Method::POST, "/favorite/people", favorites::create_people),
        endpoint(
            Method::DELETE,
            "/favorite/people/{id}",
            views::destroy::<favorite_people::Entity>,
        ),
        endpoint(Method::GET, "/favorite_planets", views::list::<favorite_planets::Entity>),
        endpoint(Method::POST, "/favorite/planets", favorites::create_planets),
        endpoint(
            Method::DELETE,
            "/favorite/planets/{id}",
            views::destroy::<favorite_planets::Entity>,
        ),
    ]
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new();
    let mut listing = Vec::new();
    for Endpoint { method, path, route } in endpoints() {
        // same-path routes merge their method routers
        router = router.route(&path.replace("{id}", ":id"), route);
        listing.push(RouteEntry {
            method: method.to_string(),
            path,
        });
    }

    router
        .method_not_allowed_fallback(sitemap::method_not_allowed)
        .fallback(sitemap::not_found)
        .layer(Extension(Arc::new(Sitemap { routes: listing })))
        .with_state(state)
}
