use crate::{
    middleware::{
        admin::admin_gate,
        jwt::{AuthUser, auth_middleware},
        validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::{
    abstract_trait::{DynClientCommandService, DynClientQueryService},
    domain::{
        requests::{CreateClientRequest, FindAllClients, UpdateClientRequest},
        responses::{ApiResponse, ApiResponsePagination, ClientResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/clients",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(FindAllClients),
    responses(
        (status = 200, description = "List of clients", body = ApiResponsePagination<Vec<ClientResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_clients(
    Extension(service): Extension<DynClientQueryService>,
    Query(params): Query<FindAllClients>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ApiResponse<ClientResponse>),
        (status = 404, description = "Client not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_client(
    Extension(service): Extension<DynClientQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/clients",
    tag = "Client",
    security(("bearer_auth" = [])),
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<ClientResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admins only"),
        (status = 409, description = "Email or tax id already registered")
    )
)]
pub async fn create_client(
    Extension(service): Extension<DynClientCommandService>,
    Extension(user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateClientRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(user.user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientResponse>),
        (status = 404, description = "Client not found"),
        (status = 403, description = "Admins only")
    )
)]
pub async fn update_client(
    Extension(service): Extension<DynClientCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateClientRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.client_id = Some(id);
    let response = service.update(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Client",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted", body = serde_json::Value),
        (status = 404, description = "Client not found"),
        (status = 403, description = "Admins only")
    )
)]
pub async fn delete_client(
    Extension(service): Extension<DynClientCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Client deleted successfully"
        })),
    ))
}

pub fn client_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/clients", get(get_clients))
        .route("/clients/{id}", get(get_client))
        .route("/clients", post(create_client))
        .route("/clients/{id}", put(update_client))
        .route("/clients/{id}", delete(delete_client))
        .route_layer(middleware::from_fn(admin_gate))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.client_service.query.clone()))
        .layer(Extension(app_state.di_container.client_service.command.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
