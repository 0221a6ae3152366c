use crate::api::{drinks, health};
use crate::errors::ErrorResponse;
use crate::models::{Drink, DrinkPatch, Ingredient, NewDrink, Recipe, ShortDrink, ShortIngredient};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const DRINKS_TAG: &str = "Drinks API";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = DRINKS_TAG, description = "Drink menu management"),
    ),
    paths(
        health::health_check,
        health::ready_check,
        drinks::list_drinks,
        drinks::list_drinks_detail,
        drinks::create_drink,
        drinks::update_drink,
        drinks::delete_drink,
    ),
    components(schemas(
        Ingredient,
        Recipe,
        Drink,
        ShortIngredient,
        ShortDrink,
        NewDrink,
        DrinkPatch,
        ErrorResponse,
        drinks::ShortDrinksResponse,
        drinks::DrinksResponse,
        drinks::DeletedResponse,
        health::Health,
    )),
    modifiers(&BearerAuth),
    info(
        title = "Drinks API",
        description = "Drink menu service with permission-gated management",
        version = "1.0.0"
    )
)]
pub(crate) struct ApiDoc;

/// Registers the bearer token scheme used by the protected endpoints
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
