//! Catalog source and the derived catalog filter.
//!
//! The catalog is an injected, ordered, read-only sequence of products.
//! The filter is a pure function over that sequence: cheap enough to run
//! on every keystroke, recomputed rather than memoized, so it can never
//! desync from its inputs.

use crate::domain::aggregates::{CategorySelection, Product};

/// Supplier of the ordered, immutable product sequence.
///
/// A live implementation may back this with a fetched feed; it must
/// preserve ordering and the product field set.
pub trait CatalogSource {
    /// All products, in the source's original order.
    fn products(&self) -> &[Product];

    /// Resolves a product by id.
    fn find(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }
}

/// Catalog backed by an in-memory vector, fully available at startup.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Stable filter over the catalog: case-insensitive substring match of
/// `query` against the title (empty query matches all) AND the category
/// selection. Original order is preserved; nothing is re-sorted.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    selection: CategorySelection,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .filter(|p| selection.matches(p.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Category;
    use crate::domain::value_objects::Money;
    use rust_decimal::Decimal;

    fn product(id: &str, title: &str, category: Category) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            price: Money::usd(Decimal::new(999, 2)),
            rating: 4.0,
            reviews: 0,
            category,
            description: String::new(),
            user_reviews: vec![],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Wireless Headphones", Category::Electronics),
            product("2", "Men's Cotton Casual Shirt", Category::Fashion),
            product("3", "Chef Knife", Category::Home),
            product("4", "SHIRT Press", Category::Home),
        ]
    }

    #[test]
    fn test_empty_query_and_all_is_identity() {
        let products = catalog();
        let visible = filter_products(&products, "", CategorySelection::All);
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let products = catalog();
        let visible = filter_products(&products, "shirt", CategorySelection::All);
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "4"]);
    }

    #[test]
    fn test_query_and_category_combine_with_and() {
        let products = catalog();
        let visible =
            filter_products(&products, "shirt", CategorySelection::Only(Category::Home));
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["4"]);
    }

    #[test]
    fn test_category_only_filters_exactly() {
        let products = catalog();
        let visible = filter_products(&products, "", CategorySelection::Only(Category::Home));
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "4"]);
    }

    #[test]
    fn test_no_match_is_empty_not_an_error() {
        let products = catalog();
        assert!(filter_products(&products, "zzz", CategorySelection::All).is_empty());
    }

    #[test]
    fn test_find_resolves_by_id() {
        let catalog = InMemoryCatalog::new(catalog());
        assert_eq!(catalog.find("3").map(|p| p.title.as_str()), Some("Chef Knife"));
        assert!(catalog.find("999").is_none());
    }
}
