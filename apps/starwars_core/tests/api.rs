use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use starwars_core::{app, connect, ensure_schema, urls, AppState, Settings};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

type App = NormalizePath<Router>;

async fn setup() -> App {
    let settings = Settings {
        port: 0,
        database_url: "sqlite::memory:".into(),
        // one connection keeps a single in-memory database alive
        db_max_connections: 1,
        sql_log: false,
    };
    let db = connect(&settings).await.expect("connect");
    ensure_schema(&db).await.expect("migrate");
    app(AppState::new(db))
}

async fn send(app: &App, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let req = match body {
        Some(v) => req.body(Body::from(v.to_string())),
        None => req.body(Body::empty()),
    }
    .unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn seed_user(app: &App, email: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/user",
        Some(json!({"email": email, "password": "hunter2"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn people_create_then_get() {
    let app = setup().await;

    let (status, created) = send(
        &app,
        "POST",
        "/people",
        Some(json!({"name": "Luke", "gender": "male"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "name": "Luke", "gender": "male"}));

    let (status, fetched) = send(&app, "GET", "/people/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json!({"people": created}));
}

#[tokio::test]
async fn planets_create_then_get() {
    let app = setup().await;

    let (status, created) = send(
        &app,
        "POST",
        "/planets",
        Some(json!({"name": "Tatooine", "climate": "arid"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/planets/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["planets"], created);
}

#[tokio::test]
async fn user_output_never_has_password() {
    let app = setup().await;

    let created = seed_user(&app, "leia@rebels.org").await;
    assert!(created.get("password").is_none());
    assert_eq!(created["is_active"], json!(true));

    let (status, fetched) = send(&app, "GET", "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = send(&app, "GET", "/user", None).await;
    for user in listed.as_array().unwrap() {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn list_returns_every_created_row() {
    let app = setup().await;

    let mut created = Vec::new();
    for (name, gender) in [("Luke", "male"), ("Leia", "female"), ("R2-D2", "n/a")] {
        let (_, body) = send(
            &app,
            "POST",
            "/people",
            Some(json!({"name": name, "gender": gender})),
        )
        .await;
        created.push(body);
    }

    let (status, listed) = send(&app, "GET", "/people", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, Value::Array(created));
}

#[tokio::test]
async fn duplicate_email_conflicts() {
    let app = setup().await;
    seed_user(&app, "han@falcon.space").await;

    let (status, body) = send(
        &app,
        "POST",
        "/user",
        Some(json!({"email": "han@falcon.space", "password": "other"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");

    let (_, listed) = send(&app, "GET", "/user", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_fields_are_validation_errors() {
    let app = setup().await;

    let (status, body) = send(&app, "POST", "/people", Some(json!({"name": "Luke"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "validation_error", "message": "gender is required"})
    );

    let (status, body) = send(&app, "POST", "/user", Some(json!({"email": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "email is required");

    let (_, listed) = send(&app, "GET", "/people", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn malformed_bodies_and_ids_use_the_envelope() {
    let app = setup().await;

    let req = Request::builder()
        .method("POST")
        .uri("/planets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value =
        serde_json::from_slice(&to_bytes(resp.into_body(), usize::MAX).await.unwrap()).unwrap();
    assert_eq!(body["error"], "validation_error");

    let (status, body) = send(
        &app,
        "POST",
        "/favorite/people",
        Some(json!({"users_id": "one", "people_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, body) = send(&app, "GET", "/people/luke", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let app = setup().await;

    for (uri, message) in [
        ("/user/42", "User 42 not found"),
        ("/people/42", "People 42 not found"),
        ("/planets/42", "Planets 42 not found"),
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "not_found", "message": message}));
    }
}

#[tokio::test]
async fn favorite_with_dangling_reference_is_rejected() {
    let app = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/favorite/people",
        Some(json!({"users_id": 1, "people_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(
        body["message"],
        "users_id 1 does not reference an existing User"
    );

    seed_user(&app, "luke@rebels.org").await;
    let (status, body) = send(
        &app,
        "POST",
        "/favorite/planets",
        Some(json!({"users_id": 1, "planets_id": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "planets_id 9 does not reference an existing Planets"
    );

    let (_, listed) = send(&app, "GET", "/favorite_people", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn favorite_people_lifecycle() {
    let app = setup().await;
    seed_user(&app, "luke@rebels.org").await;
    send(
        &app,
        "POST",
        "/people",
        Some(json!({"name": "Yoda", "gender": "male"})),
    )
    .await;

    // trailing slash is accepted, as the legacy routes had it
    let (status, created) = send(
        &app,
        "POST",
        "/favorite/people/",
        Some(json!({"users_id": 1, "people_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "users_id": 1, "people_id": 1}));

    let (status, body) = send(&app, "DELETE", "/favorite/people/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite_people 99 not found");
    let (_, listed) = send(&app, "GET", "/favorite_people", None).await;
    assert_eq!(listed, json!([created]));

    let (status, deleted) = send(&app, "DELETE", "/favorite/people/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = send(&app, "DELETE", "/favorite/people/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, listed) = send(&app, "GET", "/favorite_people", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn favorite_planets_lifecycle() {
    let app = setup().await;
    seed_user(&app, "han@falcon.space").await;
    send(
        &app,
        "POST",
        "/planets",
        Some(json!({"name": "Hoth", "climate": "frozen"})),
    )
    .await;

    let (status, created) = send(
        &app,
        "POST",
        "/favorite/planets",
        Some(json!({"users_id": 1, "planets_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({"id": 1, "users_id": 1, "planets_id": 1}));

    let (status, deleted) = send(&app, "DELETE", "/favorite/planets/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (_, listed) = send(&app, "GET", "/favorite_planets", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn favorite_users_lists_its_own_rows() {
    let app = setup().await;
    seed_user(&app, "chewie@falcon.space").await;
    send(
        &app,
        "POST",
        "/planets",
        Some(json!({"name": "Kashyyyk", "climate": "humid"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/favorite/planets",
        Some(json!({"users_id": 1, "planets_id": 1})),
    )
    .await;

    let (status, created) = send(
        &app,
        "POST",
        "/favorite/users",
        Some(json!({"users_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = send(&app, "GET", "/favorite_users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([{"id": 1, "users_id": 1}]));
    assert_eq!(listed[0], created);

    let (status, _) = send(&app, "DELETE", "/favorite/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn sitemap_lists_registered_routes() {
    let app = setup().await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let routes = body["routes"].as_array().unwrap();
    assert!(routes.contains(&json!({"method": "DELETE", "path": "/favorite/people/{id}"})));

    let registered = urls::endpoints();
    assert_eq!(routes.len(), registered.len());
    for endpoint in &registered {
        let entry = json!({"method": endpoint.method.as_str(), "path": endpoint.path});
        assert!(routes.contains(&entry), "{entry} missing from listing");
    }

    for route in routes {
        let method = route["method"].as_str().unwrap();
        let path = route["path"].as_str().unwrap().replace("{id}", "999");
        let body = (method == "POST").then(|| json!({}));
        let (status, resp) = send(&app, method, &path, body).await;
        assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        let message = resp["message"].as_str().unwrap_or_default();
        assert!(!message.starts_with("no route"), "{method} {path}");
    }
}

#[tokio::test]
async fn unsupported_methods_use_the_envelope() {
    let app = setup().await;

    let (status, body) = send(
        &app,
        "PUT",
        "/people/1",
        Some(json!({"name": "Luke", "gender": "male"})),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body,
        json!({"error": "method_not_allowed", "message": "PUT not allowed on /people/1"})
    );

    let (status, body) = send(&app, "DELETE", "/people/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "method_not_allowed");
}

#[tokio::test]
async fn blank_password_is_rejected() {
    let app = setup().await;

    let (status, body) = send(
        &app,
        "POST",
        "/user",
        Some(json!({"email": "a@b", "password": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "validation_error", "message": "password is required"})
    );

    let (_, listed) = send(&app, "GET", "/user", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn unknown_routes_use_the_envelope() {
    let app = setup().await;

    let (status, body) = send(&app, "GET", "/starships", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "not_found", "message": "no route for /starships"})
    );
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = setup().await;

    let req = Request::builder()
        .method("GET")
        .uri("/people")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
