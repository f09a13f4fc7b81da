use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Stored recipe, as returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    /// Kept with the offset it was written with.
    #[serde(default = "published_now")]
    pub published_at: DateTime<FixedOffset>,
}

/// Create/update body. Every field is optional; absent or null collections decode as empty.
///
/// `id` and `publishedAt` are accepted so a full Recipe round-trips through the
/// decoder, but the store always overwrites them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<FixedOffset>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Timestamp stamped on a new recipe.
pub fn published_now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

/// Fresh opaque identifier for a new recipe.
pub fn new_recipe_id() -> String {
    Uuid::new_v4().to_string()
}

impl Recipe {
    /// Build a new record from client input with server-assigned identity.
    pub fn from_input(input: RecipeInput, id: String, published_at: DateTime<FixedOffset>) -> Self {
        Self {
            id,
            name: input.name,
            tags: input.tags,
            ingredients: input.ingredients,
            instructions: input.instructions,
            published_at,
        }
    }

    /// Replace every client-owned field; `id` and `published_at` stay.
    pub fn apply(&mut self, input: RecipeInput) {
        self.name = input.name;
        self.tags = input.tags;
        self.ingredients = input.ingredients;
        self.instructions = input.instructions;
    }

    /// Case-insensitive exact match against any tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| eq_fold(t, tag))
    }
}

fn eq_fold(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}
