use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line of a drink recipe
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Ingredient {
    /// Display color of the ingredient layer
    pub color: String,
    /// Ingredient name
    pub name: String,
    /// Relative amount of the ingredient
    pub parts: u32,
}

/// Ordered list of ingredients.
///
/// Requests may send a single ingredient object instead of an array;
/// it is stored as a one-element recipe.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(from = "RecipeInput")]
pub struct Recipe(pub Vec<Ingredient>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl From<RecipeInput> for Recipe {
    fn from(input: RecipeInput) -> Self {
        match input {
            RecipeInput::Many(ingredients) => Recipe(ingredients),
            RecipeInput::One(ingredient) => Recipe(vec![ingredient]),
        }
    }
}

impl Recipe {
    /// Recipe with ingredient names stripped
    pub fn short(&self) -> Vec<ShortIngredient> {
        self.0
            .iter()
            .map(|ingredient| ShortIngredient {
                color: ingredient.color.clone(),
                parts: ingredient.parts,
            })
            .collect()
    }
}

/// A stored drink, serialized as its long (detailed) view
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Recipe,
}

impl Drink {
    /// The public view of a drink
    pub fn short(&self) -> ShortDrink {
        ShortDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.short(),
        }
    }
}

/// Recipe line exposed to unauthenticated callers
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// Public view of a drink, without ingredient names
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ShortDrink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

/// Body of a drink creation request
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Recipe,
}

/// Body of a drink update request; absent fields are left unchanged
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
pub struct DrinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
}
