use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user;

// --- Role Based Access Guards ---

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Helper to extract and validate the user from request headers, then insert
/// the `AuthUser` back into the request extensions for the handler.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = <AuthUser as FromRequestParts<()>>::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Loads the caller's user row; an authenticated token for a user that no
/// longer exists is denied.
async fn load_caller(
    state: &AppState,
    user_id: i64,
) -> Result<user::Model, (StatusCode, Json<ApiResponse<Empty>>)> {
    match user::Model::find_by_id(state.db(), user_id).await {
        Ok(Some(u)) => Ok(u),
        Ok(None) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Authentication required")),
        )),
        Err(e) => {
            tracing::warn!(error = %e, user_id, "DB error while loading caller; denying access");
            Err((
                StatusCode::FORBIDDEN,
                Json(ApiResponse::error(
                    "You do not have permission to perform this action",
                )),
            ))
        }
    }
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Admin-only guard; relies on the admin claim baked into the token.
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !user.0.admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Admin access required")),
        ));
    }

    Ok(next.run(req).await)
}

/// Guard for notification senders: admin, coordinator or teacher.
pub async fn require_staff(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;
    let caller = load_caller(&state, user.0.sub).await?;

    if !(caller.is_admin() || caller.is_coordinator() || caller.is_teacher()) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "Only admin, coordinator or teacher may perform this action",
            )),
        ));
    }

    Ok(next.run(req).await)
}

/// Guard for content uploads: teacher or admin.
pub async fn require_teacher_or_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;
    let caller = load_caller(&state, user.0.sub).await?;

    if !(caller.is_teacher() || caller.is_admin()) {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Not allowed to upload content")),
        ));
    }

    Ok(next.run(req).await)
}
