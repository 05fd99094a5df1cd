use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use diary_core::AccountService;
use diary_core::models::{DiaryUpdate, NewDiaryEntry};
use diary_db::UserRepository;

use crate::dto::{
    DiaryEntryResponse, DiaryRequest, HealthResponse, LoginRequest, MessageResponse,
    RegisterRequest, TokenResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/users", post(register))
        .route("/users/login", post(login))
        .route("/diary/create", post(create_diary))
        .route("/diary/{user_id}", get(list_diary_by_owner))
        .route("/diary/detail/{id_diary}", get(list_diary_by_id))
        .route("/diary/update/{id}", put(update_diary))
        .route("/diary/delete/{id_diary}", delete(delete_diary));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

/// Parse a numeric path segment, naming the parameter in the error.
fn parse_id(raw: &str, param: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_input(format!("Invalid {param} parameter")))
}

fn accounts(state: &AppState) -> AccountService<UserRepository> {
    AccountService::new(state.db.user_repo(), state.tokens.clone())
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User created", body = MessageResponse),
        (status = 400, description = "Bad request", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_input(e.body_text()))?;

    accounts(&state)
        .register(&body.name, &body.email, &body.password)
        .await?;

    Ok(Json(MessageResponse::new("User created successfully!")))
}

#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token", body = TokenResponse),
        (status = 400, description = "Bad request", body = crate::dto::ErrorResponse),
        (status = 401, description = "Invalid credentials or store failure", body = crate::dto::ErrorResponse),
        (status = 500, description = "Token signing failure", body = crate::dto::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_input(e.body_text()))?;

    let token = accounts(&state).login(&body.email, &body.password).await?;

    Ok(Json(TokenResponse { token }))
}

// ---------------------------------------------------------------------------
// Diary
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/diary/create",
    request_body = DiaryRequest,
    responses(
        (status = 200, description = "Entry created", body = MessageResponse),
        (status = 400, description = "Bad request", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse),
    ),
    tag = "diary"
)]
pub async fn create_diary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DiaryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::invalid_input(e.body_text()))?;

    let entry = NewDiaryEntry {
        user_id: body.id_user,
        title: body.title,
        body: body.diary,
    };
    state.db.diary_repo().create(&entry).await?;
    tracing::info!(user_id = entry.user_id, "Diary entry created");

    Ok(Json(MessageResponse::new("User created successfully!")))
}

#[utoipa::path(
    get,
    path = "/diary/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Entries owned by the user", body = [DiaryEntryResponse]),
        (status = 400, description = "Non-numeric user_id", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse),
    ),
    tag = "diary"
)]
pub async fn list_diary_by_owner(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = parse_id(&user_id, "user_id")?;

    let entries = state.db.diary_repo().list_by_owner(user_id).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(DiaryEntryResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/diary/detail/{id_diary}",
    params(
        ("id_diary" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Matching entries (zero or one)", body = [DiaryEntryResponse]),
        (status = 400, description = "Non-numeric id_diary", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse),
    ),
    tag = "diary"
)]
pub async fn list_diary_by_id(
    State(state): State<Arc<AppState>>,
    Path(id_diary): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id_diary = parse_id(&id_diary, "id_diary")?;

    let entries = state.db.diary_repo().list_by_id(id_diary).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(DiaryEntryResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    put,
    path = "/diary/update/{id}",
    params(
        ("id" = i64, Path, description = "Entry ID")
    ),
    request_body = DiaryRequest,
    responses(
        (status = 200, description = "Update applied (possibly to zero rows)", body = MessageResponse),
        (status = 400, description = "Non-numeric id or bad body", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse),
    ),
    tag = "diary"
)]
pub async fn update_diary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<DiaryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id_diary = parse_id(&id, "id")?;
    let Json(body) = payload.map_err(|_| ApiError::invalid_input("Invalid data"))?;

    let update = DiaryUpdate {
        id_diary,
        user_id: body.id_user,
        title: body.title,
        body: body.diary,
    };
    state.db.diary_repo().update(&update).await?;

    Ok(Json(MessageResponse::new("Diary updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/diary/delete/{id_diary}",
    params(
        ("id_diary" = i64, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted; body is always an empty list", body = [DiaryEntryResponse]),
        (status = 400, description = "Non-numeric id_diary", body = crate::dto::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::dto::ErrorResponse),
    ),
    tag = "diary"
)]
pub async fn delete_diary(
    State(state): State<Arc<AppState>>,
    Path(id_diary): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id_diary = parse_id(&id_diary, "id_diary")?;

    let removed = state.db.diary_repo().delete_by_id(id_diary).await?;
    tracing::info!(id_diary, removed, "Diary entry deleted");

    // Deleted rows are not read back.
    Ok(Json(Vec::<DiaryEntryResponse>::new()))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, Json(response))
}
