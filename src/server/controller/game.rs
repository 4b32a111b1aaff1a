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
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::game::{CreateGameParam, UpdateGameParam},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Get the caller's games with their tags, newest first.
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved games", body = Vec<GameDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_games(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let games = GameService::new(&state.db).get_all(user.id).await?;
    let dtos: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one of the caller's games.
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved game", body = GameDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    let game = GameService::new(&state.db).get_by_id(id, user.id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Add a game to the caller's backlog.
///
/// `tag_ids` referring to tags the caller cannot see are ignored.
///
/// # Returns
/// - `201 Created` - The created game
/// - `400 Bad Request` - Blank title, unknown status or unparseable body
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Successfully created game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Json(payload) = payload?;
    let param = CreateGameParam::from_dto(user.id, payload)?;
    let game = GameService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Update one of the caller's games.
///
/// Absent fields are left unchanged. `tag_ids` absent keeps the tags, `[]` clears them,
/// any other list replaces them.
#[utoipa::path(
    put,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Successfully updated game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    let Json(payload) = payload?;
    let param = UpdateGameParam::from_dto(payload)?;
    let game = GameService::new(&state.db).update(id, user.id, param).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete one of the caller's games, removing it from every tier list.
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = Uuid, Path, description = "Game ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted game"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    let Path(id) = id?;

    GameService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
