use crate::middleware::jwt::AuthUser;
use axum::{
    Extension, Json,
    body::Body,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;

/// Reads are open to any authenticated user; writes are admin-only.
pub fn is_allowed(method: &Method, is_admin: bool) -> bool {
    *method == Method::GET || is_admin
}

pub async fn admin_gate(
    Extension(user): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    if !is_allowed(req.method(), user.is_admin) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Admins only.".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_open_to_common_users() {
        assert!(is_allowed(&Method::GET, false));
        assert!(is_allowed(&Method::GET, true));
    }

    #[test]
    fn test_mutations_require_admin() {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            assert!(!is_allowed(&method, false));
            assert!(is_allowed(&method, true));
        }
    }
}
