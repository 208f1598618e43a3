use axum::{
    Extension, Router,
    body::Body,
    http::{Request, StatusCode, header},
    middleware,
    routing::get,
};
use server::middleware::{admin_gate, auth_middleware};
use shared::{
    abstract_trait::{DynJwtService, JwtServiceTrait},
    config::JwtConfig,
};
use std::sync::Arc;
use tower::ServiceExt;

fn jwt_service() -> DynJwtService {
    Arc::new(JwtConfig::new("integration-test-secret"))
}

// Same wiring as the clients/products/orders routers: the auth middleware
// runs first, then the admin gate.
fn gated_router(jwt: DynJwtService) -> Router {
    Router::new()
        .route(
            "/clients",
            get(|| async { "ok" }).post(|| async { "created" }),
        )
        .route(
            "/clients/{id}",
            get(|| async { "ok" })
                .put(|| async { "updated" })
                .delete(|| async { "deleted" }),
        )
        .route_layer(middleware::from_fn(admin_gate))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(jwt))
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = gated_router(jwt_service());

    let response = app.oneshot(request("GET", "/clients", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = gated_router(jwt_service());

    let response = app
        .oneshot(request("GET", "/clients", Some("not-a-jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_cannot_be_used_as_access_token() {
    let jwt = jwt_service();
    let refresh = jwt.generate_token(1, true, "refresh").unwrap();
    let app = gated_router(jwt.clone());

    let response = app
        .oneshot(request("GET", "/clients", Some(&refresh)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_common_user_can_read() {
    let jwt = jwt_service();
    let token = jwt.generate_token(2, false, "access").unwrap();
    let app = gated_router(jwt.clone());

    let response = app
        .oneshot(request("GET", "/clients", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_common_user_cannot_mutate() {
    let jwt = jwt_service();
    let token = jwt.generate_token(2, false, "access").unwrap();

    for (method, uri) in [
        ("POST", "/clients"),
        ("PUT", "/clients/1"),
        ("DELETE", "/clients/1"),
    ] {
        let app = gated_router(jwt.clone());
        let response = app
            .oneshot(request(method, uri, Some(&token)))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{method} {uri} should be admin-only"
        );
    }
}

#[tokio::test]
async fn test_admin_can_mutate() {
    let jwt = jwt_service();
    let token = jwt.generate_token(1, true, "access").unwrap();

    for (method, uri) in [
        ("POST", "/clients"),
        ("PUT", "/clients/1"),
        ("DELETE", "/clients/1"),
    ] {
        let app = gated_router(jwt.clone());
        let response = app
            .oneshot(request(method, uri, Some(&token)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
