use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        tag::{CreateTagDto, TagDto, UpdateTagDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::tag::TagService, state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Get the global tags and the caller's own tags, ordered by name.
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<TagDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let tags = TagService::new(&state.db).get_visible(user.id).await?;
    let dtos: Vec<TagDto> = tags.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a tag.
///
/// # Access Control
/// - Authenticated user for personal tags
/// - `Admin` for global tags (`"global": true`)
///
/// # Returns
/// - `201 Created` - The created tag
/// - `400 Bad Request` - Blank name
/// - `403 Forbidden` - Global tag requested by a non-admin
/// - `409 Conflict` - Tag name already used by the same owner
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 201, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Global tags require admin", body = ErrorDto),
        (status = 409, description = "Tag already exists", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTagDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;
    let tag = TagService::new(&state.db)
        .create(&user, &payload.name, payload.global)
        .await?;

    Ok((StatusCode::CREATED, Json(tag.into_dto())))
}

/// Rename a tag.
#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = Uuid, Path, description = "Tag ID")
    ),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Successfully renamed tag", body = TagDto),
        (status = 400, description = "Invalid tag data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Global tags require admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 409, description = "Tag already exists", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateTagDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    let Json(payload) = payload?;
    let tag = TagService::new(&state.db)
        .rename(id, &user, &payload.name)
        .await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag, detaching it from every game.
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = TAG_TAG,
    params(
        ("id" = Uuid, Path, description = "Tag ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tag"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Global tags require admin", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    TagService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
