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
        api::{ErrorDto, MessageDto},
        tier_list::{TierListDto, TierListInputDto, TierListSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::tier_list::TierListParam,
        service::tier_list::TierListService, state::AppState,
    },
};

/// Tag for grouping tier list endpoints in OpenAPI documentation
pub static TIER_LIST_TAG: &str = "tier_list";

/// Create a new tier list.
///
/// Creates a tier list owned by the caller with the submitted rows and items. Every row
/// and item gets a new server-generated id; ids sent by the client are ignored.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `201 Created` - The created tier list, fully hydrated
/// - `400 Bad Request` - Unparseable body, blank name or malformed colour
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Store rejected the structure (e.g. unknown game)
#[utoipa::path(
    post,
    path = "/api/tier-lists",
    tag = TIER_LIST_TAG,
    request_body = TierListInputDto,
    responses(
        (status = 201, description = "Successfully created tier list", body = TierListDto),
        (status = 400, description = "Invalid tier list data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_tier_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TierListInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;
    let param = TierListParam::from_dto(payload)?;
    let tier_list = TierListService::new(&state.db).create(user.id, param).await?;

    Ok((StatusCode::CREATED, Json(tier_list.into_dto())))
}

/// Get the caller's tier lists.
///
/// Returns every tier list owned by the caller, newest first, without rows.
///
/// # Returns
/// - `200 OK` - List of tier list summaries
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tier-lists",
    tag = TIER_LIST_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tier lists", body = Vec<TierListSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_tier_lists(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let tier_lists = TierListService::new(&state.db).get_all(user.id).await?;
    let dtos: Vec<TierListSummaryDto> = tier_lists.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a tier list with its rows, items and games.
///
/// Rows and items are ordered by `sort_order` ascending, ties in submission order.
///
/// # Returns
/// - `200 OK` - The hydrated tier list
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - Tier list missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tier-lists/{id}",
    tag = TIER_LIST_TAG,
    params(
        ("id" = Uuid, Path, description = "Tier list ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tier list", body = TierListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Tier list not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_tier_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    let tier_list = TierListService::new(&state.db).get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(tier_list.into_dto())))
}

/// Replace a tier list's name and structure.
///
/// The submitted rows and items replace the stored ones entirely within one transaction.
/// On failure nothing changes.
///
/// # Returns
/// - `200 OK` - `{"message": "Updated successfully"}`
/// - `400 Bad Request` - Unparseable body, blank name or malformed colour
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - Tier list missing or owned by another user
/// - `500 Internal Server Error` - Store rejected the structure, rolled back
#[utoipa::path(
    put,
    path = "/api/tier-lists/{id}",
    tag = TIER_LIST_TAG,
    params(
        ("id" = Uuid, Path, description = "Tier list ID")
    ),
    request_body = TierListInputDto,
    responses(
        (status = 200, description = "Successfully replaced tier list", body = MessageDto),
        (status = 400, description = "Invalid tier list data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Tier list not found", body = ErrorDto),
        (status = 500, description = "Could not update tier list", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_tier_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TierListInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    let Json(payload) = payload?;
    let param = TierListParam::from_dto(payload)?;
    TierListService::new(&state.db)
        .replace(id, user.id, param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Updated successfully".to_string(),
        }),
    ))
}

/// Delete a tier list together with its rows and items.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - Tier list missing or owned by another user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tier-lists/{id}",
    tag = TIER_LIST_TAG,
    params(
        ("id" = Uuid, Path, description = "Tier list ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tier list"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Tier list not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_tier_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    TierListService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
