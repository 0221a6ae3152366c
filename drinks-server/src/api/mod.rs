pub(crate) mod drinks;
pub(crate) mod health;

use crate::auth::middleware::{authorize, RequiredPermission};
use crate::auth::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::routing::{delete, get, patch, post, MethodRouter};
use axum::{middleware, Router};
use drinks::{create_drink, delete_drink, list_drinks, list_drinks_detail, update_drink};

/// Combines all API routes into a single router
pub(super) fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(drinks_routes(state))
}

/// Drinks routes; everything except the public listing requires a permission
fn drinks_routes(state: &AppState) -> Router<AppState> {
    let guard = |route: MethodRouter<AppState>, permission: &'static str| {
        route.route_layer(middleware::from_fn_with_state(
            RequiredPermission::new(state, permission),
            authorize,
        ))
    };

    Router::new()
        .route(
            "/drinks",
            get(list_drinks).merge(guard(post(create_drink), POST_DRINKS)),
        )
        .route(
            "/drinks-detail",
            guard(get(list_drinks_detail), GET_DRINKS_DETAIL),
        )
        .route(
            "/drinks/{id}",
            guard(patch(update_drink), PATCH_DRINKS)
                .merge(guard(delete(delete_drink), DELETE_DRINKS)),
        )
}

/// Unknown paths answer with the JSON error envelope
pub(crate) async fn not_found() -> ApiError {
    ApiError::not_found()
}

