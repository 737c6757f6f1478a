//! Cart aggregate.
//!
//! The cart owns its invariants: every line has qty >= 1, one line per
//! product id (repeat adds merge), insertion order preserved for
//! display. Totals are derived on read from the current lines, never
//! cached, so they cannot go stale across mutations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::Product;
use crate::domain::value_objects::Money;

/// A cart entry pairing a product reference with a quantity.
///
/// Title and price are frozen at add time: a later catalog price change
/// never alters what is already in the cart or in placed orders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub title: String,
    pub price: Money,
    pub qty: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.qty)
    }
}

/// The shopping cart.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: String,
}

impl Cart {
    pub fn new(currency: &str) -> Self {
        Self { lines: vec![], currency: currency.to_string() }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `product`: merges into the existing line if the
    /// product is already in the cart, otherwise appends a new line with
    /// qty 1. Quantity is unbounded.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.qty = line.qty.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price.clone(),
            qty: 1,
        });
    }

    /// Removes the line for `product_id`. Removing an absent line is a
    /// no-op, not an error.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Applies a quantity delta to the line for `product_id`.
    ///
    /// The floor is 1, never 0: a delta that would take the quantity
    /// below 1 removes the line instead (decrement mirrors add, it does
    /// not clamp). Unknown ids are ignored.
    pub fn change_qty(&mut self, product_id: &str, delta: i32) {
        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return;
        };
        let new_qty = i64::from(line.qty) + i64::from(delta);
        if new_qty >= 1 {
            line.qty = new_qty.min(i64::from(u32::MAX)) as u32;
        } else {
            self.remove(product_id);
        }
    }

    /// Sum of price x qty over all lines, computed on demand.
    pub fn total(&self) -> Money {
        let amount: Decimal = self.lines.iter().map(|l| l.line_total().amount()).sum();
        Money::new(amount, &self.currency)
    }

    /// Total quantity across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Empties the cart. Invoked by the order ledger on successful
    /// placement; the rendering layer never calls this directly.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("USD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Category;
    use rust_decimal::Decimal;

    fn test_product(id: &str, price: Decimal) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {id}"),
            price: Money::usd(price),
            rating: 4.5,
            reviews: 10,
            category: Category::Home,
            description: String::new(),
            user_reviews: vec![],
        }
    }

    #[test]
    fn test_add_same_product_merges_into_one_line() {
        let mut cart = Cart::default();
        let p = test_product("4", Decimal::new(4550, 2));

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 2);
        assert_eq!(cart.total().amount(), Decimal::new(9100, 2)); // 91.00
    }

    #[test]
    fn test_totals_track_every_mutation() {
        let mut cart = Cart::default();
        let a = test_product("1", Decimal::new(29999, 2));
        let b = test_product("2", Decimal::new(1499, 2));

        cart.add(&a);
        cart.add(&b);
        cart.change_qty("2", 3);

        let expected: Decimal = cart
            .lines()
            .iter()
            .map(|l| l.price.amount() * Decimal::from(l.qty))
            .sum();
        assert_eq!(cart.total().amount(), expected);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_decrement_from_one_removes_the_line() {
        let mut cart = Cart::default();
        cart.add(&test_product("1", Decimal::new(999, 2)));

        cart.change_qty("1", -1);

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_big_negative_delta_removes_rather_than_clamping() {
        let mut cart = Cart::default();
        let p = test_product("1", Decimal::new(999, 2));
        cart.add(&p);
        cart.add(&p);
        cart.add(&p);

        cart.change_qty("1", -5);

        assert!(cart.line("1").is_none());
        assert!(cart.lines().iter().all(|l| l.qty >= 1));
    }

    #[test]
    fn test_decrement_above_floor_just_updates() {
        let mut cart = Cart::default();
        let p = test_product("1", Decimal::new(999, 2));
        cart.add(&p);
        cart.add(&p);

        cart.change_qty("1", -1);

        assert_eq!(cart.line("1").map(|l| l.qty), Some(1));
    }

    #[test]
    fn test_remove_absent_line_is_a_noop() {
        let mut cart = Cart::default();
        cart.add(&test_product("1", Decimal::new(999, 2)));

        cart.remove("no-such-id");
        cart.change_qty("no-such-id", 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].qty, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::default();
        cart.add(&test_product("b", Decimal::new(100, 0)));
        cart.add(&test_product("a", Decimal::new(200, 0)));
        cart.add(&test_product("b", Decimal::new(100, 0)));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::default();
        let mut p = test_product("1", Decimal::new(1000, 2));
        cart.add(&p);

        p.price = Money::usd(Decimal::new(9999, 2));
        cart.change_qty("1", 1);

        assert_eq!(cart.total().amount(), Decimal::new(2000, 2));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add(&test_product("1", Decimal::new(999, 2)));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().amount(), Decimal::ZERO);
    }
}
