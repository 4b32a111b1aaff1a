use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        game::{self, create_game, delete_game, get_game, get_games, update_game},
        health::{self, health},
        tag::{self, create_tag, delete_tag, get_tags, update_tag},
        tier_list::{
            self, create_tier_list, delete_tier_list, get_tier_list, get_tier_lists,
            update_tier_list,
        },
        user::{
            self, delete_user, get_me, get_user, get_users, login, register, update_user,
        },
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Backlog API", description = "Game backlog, tags and tier lists"),
    paths(
        health::health,
        user::register,
        user::login,
        user::get_me,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        game::get_games,
        game::get_game,
        game::create_game,
        game::update_game,
        game::delete_game,
        tag::get_tags,
        tag::create_tag,
        tag::update_tag,
        tag::delete_tag,
        tier_list::get_tier_lists,
        tier_list::get_tier_list,
        tier_list::create_tier_list,
        tier_list::update_tier_list,
        tier_list::delete_tier_list,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "user", description = "Accounts and authentication"),
        (name = "game", description = "Backlog entries"),
        (name = "tag", description = "Personal and global tags"),
        (name = "tier_list", description = "Tier lists"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by authenticated endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/users", post(register).get(get_users))
        .route("/api/users/login", post(login))
        .route("/api/users/me", get(get_me))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/games", get(get_games).post(create_game))
        .route(
            "/api/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route("/api/tags", get(get_tags).post(create_tag))
        .route("/api/tags/{id}", put(update_tag).delete(delete_tag))
        .route("/api/tier-lists", get(get_tier_lists).post(create_tier_list))
        .route(
            "/api/tier-lists/{id}",
            get(get_tier_list)
                .put(update_tier_list)
                .delete(delete_tier_list),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
