use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MyDiary API",
        version = "0.1.0",
        description = "Personal diary backend: accounts and diary entries."
    ),
    paths(
        crate::routes::register,
        crate::routes::login,
        crate::routes::create_diary,
        crate::routes::list_diary_by_owner,
        crate::routes::list_diary_by_id,
        crate::routes::update_diary,
        crate::routes::delete_diary,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::RegisterRequest,
        crate::dto::LoginRequest,
        crate::dto::TokenResponse,
        crate::dto::DiaryRequest,
        crate::dto::DiaryEntryResponse,
        crate::dto::MessageResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "users", description = "Registration and login"),
        (name = "diary", description = "Diary entry CRUD"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
