use crate::auth::Claims;
use crate::errors::{ApiError, ErrorResponse};
use crate::models::{Drink, DrinkPatch, NewDrink, ShortDrink};
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use crate::store::StoreError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use axum::Extension;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public drinks listing
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ShortDrinksResponse {
    pub success: bool,
    pub drinks: Vec<ShortDrink>,
}

/// Detailed drinks listing
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct DrinksResponse {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

impl DrinksResponse {
    fn new(drinks: Vec<Drink>) -> Json<Self> {
        Json(Self {
            success: true,
            drinks,
        })
    }
}

/// Result of a deletion
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct DeletedResponse {
    pub success: bool,
    /// Id of the removed drink
    pub deleted: i64,
}

/// Maps a store failure to the endpoint's fault status; missing rows are always 404
fn store_fault(fault: fn() -> ApiError) -> impl Fn(StoreError) -> ApiError {
    move |err| match err {
        StoreError::NotFound(id) => {
            info!("Drink {} not found", id);
            ApiError::not_found()
        }
        err => {
            error!("Store operation failed: {}", err);
            fault()
        }
    }
}

fn drink_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id).map_err(|e| {
        info!("Invalid drink id: {}", e);
        ApiError::not_found()
    })
}

#[utoipa::path(
    get,
    path = "/drinks",
    tag = DRINKS_TAG,
    responses(
        (status = 200, description = "Public view of all drinks", body = ShortDrinksResponse),
        (status = 455, description = "Drinks could not be listed", body = ErrorResponse)
    )
)]
pub(crate) async fn list_drinks(
    State(state): State<AppState>,
) -> Result<Json<ShortDrinksResponse>, ApiError> {
    let drinks = state.store.list_all().await.map_err(|e| {
        error!("Failed to list drinks: {}", e);
        let fault = ApiError::listing_failed(state.settings.list_fault_status);
        if fault.status_code.canonical_reason().is_none() {
            warn!("Answering with non-standard status {}", fault.status_code);
        }
        fault
    })?;

    Ok(Json(ShortDrinksResponse {
        success: true,
        drinks: drinks.iter().map(Drink::short).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/drinks-detail",
    tag = DRINKS_TAG,
    params(
        ("Authorization" = String, Header, description = "Bearer token granting get:drinks-detail"),
    ),
    responses(
        (status = 200, description = "Detailed view of all drinks", body = DrinksResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Permission not granted", body = ErrorResponse),
        (status = 422, description = "Drinks could not be listed", body = ErrorResponse)
    )
)]
pub(crate) async fn list_drinks_detail(
    State(state): State<AppState>,
) -> Result<Json<DrinksResponse>, ApiError> {
    let drinks = state
        .store
        .list_all()
        .await
        .map_err(store_fault(ApiError::unprocessable))?;
    Ok(DrinksResponse::new(drinks))
}

#[utoipa::path(
    post,
    path = "/drinks",
    tag = DRINKS_TAG,
    request_body = NewDrink,
    params(
        ("Authorization" = String, Header, description = "Bearer token granting post:drinks"),
    ),
    responses(
        (status = 200, description = "Drink created", body = DrinksResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Permission not granted", body = ErrorResponse),
        (status = 500, description = "Invalid body or storage failure", body = ErrorResponse)
    )
)]
pub(crate) async fn create_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<NewDrink>, JsonRejection>,
) -> Result<Json<DrinksResponse>, ApiError> {
    let Json(drink) = body.map_err(|e| {
        warn!("Invalid drink body: {}", e.body_text());
        ApiError::internal()
    })?;

    let drink = state
        .store
        .insert(drink)
        .await
        .map_err(store_fault(ApiError::internal))?;
    info!(
        "Drink {} '{}' created by {}",
        drink.id,
        drink.title,
        claims.subject()
    );
    Ok(DrinksResponse::new(vec![drink]))
}

#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    tag = DRINKS_TAG,
    request_body = DrinkPatch,
    params(
        ("id" = i64, Path, description = "Drink id"),
        ("Authorization" = String, Header, description = "Bearer token granting patch:drinks"),
    ),
    responses(
        (status = 200, description = "Drink updated", body = DrinksResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Permission not granted", body = ErrorResponse),
        (status = 404, description = "Drink not found", body = ErrorResponse),
        (status = 500, description = "Invalid body or storage failure", body = ErrorResponse)
    )
)]
pub(crate) async fn update_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<DrinkPatch>, JsonRejection>,
) -> Result<Json<DrinksResponse>, ApiError> {
    let id = drink_id(id)?;
    let Json(patch) = match body {
        Ok(patch) => patch,
        Err(e) => {
            // an absent drink is reported before the body
            state
                .store
                .get(id)
                .await
                .map_err(store_fault(ApiError::internal))?;
            warn!("Invalid patch body for drink {}: {}", id, e.body_text());
            return Err(ApiError::internal());
        }
    };

    let drink = state
        .store
        .update(id, patch)
        .await
        .map_err(store_fault(ApiError::internal))?;
    info!("Drink {} updated by {}", drink.id, claims.subject());
    Ok(DrinksResponse::new(vec![drink]))
}

#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    tag = DRINKS_TAG,
    params(
        ("id" = i64, Path, description = "Drink id"),
        ("Authorization" = String, Header, description = "Bearer token granting delete:drinks"),
    ),
    responses(
        (status = 200, description = "Drink deleted", body = DeletedResponse),
        (status = 401, description = "Missing or expired token", body = ErrorResponse),
        (status = 403, description = "Permission not granted", body = ErrorResponse),
        (status = 404, description = "Drink not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = drink_id(id)?;
    state
        .store
        .delete(id)
        .await
        .map_err(store_fault(ApiError::internal))?;
    info!("Drink {} deleted by {}", id, claims.subject());
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}
