/// Catalog filter for `GET /allMenu`
///
/// `category` and `foodOrigin` default to `all`, which disables that
/// filter. Other values match the field as a case-insensitive substring.
use serde::Deserialize;

const ALL: &str = "all";

/// Raw query string of `GET /allMenu`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    #[serde(rename = "foodOrigin")]
    pub food_origin: Option<String>,
}

/// Normalized filter handed to the menu repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: Option<String>,
    pub food_origin: Option<String>,
}

impl MenuFilter {
    pub fn from_query(query: MenuQuery) -> Self {
        Self {
            category: normalize(query.category),
            food_origin: normalize(query.food_origin.map(|origin| origin.to_lowercase())),
        }
    }

    /// Case-insensitive substring match, mirroring the database filter
    pub fn matches(&self, category: Option<&str>, food_origin: Option<&str>) -> bool {
        field_matches(self.category.as_deref(), category)
            && field_matches(self.food_origin.as_deref(), food_origin)
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != ALL)
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual
            .map(|actual| actual.to_lowercase().contains(&wanted.to_lowercase()))
            .unwrap_or(false),
    }
}
