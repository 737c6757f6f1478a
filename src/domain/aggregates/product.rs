//! Product catalog records.
//!
//! Products are plain immutable data supplied by the catalog source at
//! startup; the core never mutates them. Cart and order lines reference
//! products by id and snapshot the fields they need.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::Money;

/// An immutable catalog product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Unique key within the catalog.
    pub id: String,
    pub title: String,
    pub price: Money,
    /// Average rating, 0 to 5.
    pub rating: f32,
    /// Number of ratings behind the average.
    pub reviews: u32,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub user_reviews: Vec<Review>,
}

/// A single customer review attached to a product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub rating: u8,
    pub comment: String,
}

/// The fixed category set carried by every product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Books,
    Toys,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Books,
        Category::Toys,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Books => "Books",
            Category::Toys => "Toys",
        };
        write!(f, "{name}")
    }
}

/// Category selector for the catalog filter.
///
/// `All` is the sentinel that matches every product; it is a filter
/// concern, deliberately not a `Category` variant, so no product can
/// ever carry it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(c) => *c == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_all_matches_every_category() {
        for c in Category::ALL {
            assert!(CategorySelection::All.matches(c));
        }
    }

    #[test]
    fn test_selection_only_is_exact() {
        let sel = CategorySelection::Only(Category::Home);
        assert!(sel.matches(Category::Home));
        assert!(!sel.matches(Category::Books));
    }
}
