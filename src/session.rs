//! The session view controller.
//!
//! A finite state machine over the storefront's screens. The rendering
//! layer reads snapshots (`view`, `cart`, `orders`, `visible_products`)
//! and feeds user intents back through [`Session::dispatch`]; it never
//! mutates core state directly. Everything is synchronous and
//! single-writer: each dispatched intent runs to completion before the
//! next one is processed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{filter_products, CatalogSource};
use crate::domain::aggregates::{Cart, CategorySelection, Order, OrderLedger, Product};
use crate::domain::events::{DomainEvent, OrderEvent};
use crate::{Result, StoreError};

/// Which screen is active.
///
/// `ProductDetail` always carries an id that resolved against the
/// catalog when the transition was made; entering it with an unknown id
/// is refused with [`StoreError::ProductNotFound`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    Home,
    ProductDetail { product_id: String },
    Cart,
    Checkout,
    OrderSuccess,
    OrderHistory,
}

/// Bottom-navigation tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    Home,
    Cart,
    Orders,
}

/// A user-originated event requesting a transition or mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    SelectProduct(String),
    Back,
    AddToCart,
    BuyNow,
    OpenCart,
    Checkout,
    PlaceOrder,
    TrackOrder,
    ContinueShopping,
    SwitchTab(Tab),
}

/// One running storefront session: the catalog handle plus all mutable
/// state (cart, order history, active view, browse filters). Nothing
/// here survives the session.
pub struct Session<C: CatalogSource> {
    catalog: C,
    cart: Cart,
    ledger: OrderLedger,
    view: ViewState,
    search_query: String,
    category: CategorySelection,
}

impl<C: CatalogSource> Session<C> {
    /// Starts a session on the given catalog, at the Home screen with an
    /// empty cart and no history.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            cart: Cart::default(),
            ledger: OrderLedger::new(),
            view: ViewState::Home,
            search_query: String::new(),
            category: CategorySelection::All,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Placed orders, most recent first.
    pub fn orders(&self) -> &[Order] {
        self.ledger.history()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn category(&self) -> CategorySelection {
        self.category
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_category(&mut self, selection: CategorySelection) {
        self.category = selection;
    }

    /// The catalog subset matching the current query and category, in
    /// catalog order. Recomputed on every call.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(self.catalog.products(), &self.search_query, self.category)
    }

    /// The product behind the `ProductDetail` screen, if that is the
    /// active view.
    pub fn active_product(&self) -> Option<&Product> {
        match &self.view {
            ViewState::ProductDetail { product_id } => self.catalog.find(product_id),
            _ => None,
        }
    }

    /// Runs one intent through the transition table.
    ///
    /// A refused transition (unknown product, empty-cart checkout)
    /// returns the error and leaves every piece of state exactly as it
    /// was. Intents that are not valid in the current view are ignored
    /// with a debug log; the rendering layer only offers valid ones.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match (self.view.clone(), intent) {
            (ViewState::Home, Intent::SelectProduct(id)) => {
                if self.catalog.find(&id).is_none() {
                    return Err(StoreError::ProductNotFound(id));
                }
                self.view = ViewState::ProductDetail { product_id: id };
            }
            (ViewState::ProductDetail { .. }, Intent::Back) => {
                self.view = ViewState::Home;
            }
            (ViewState::ProductDetail { product_id }, Intent::AddToCart) => {
                self.add_to_cart(&product_id)?;
            }
            (ViewState::ProductDetail { product_id }, Intent::BuyNow) => {
                self.add_to_cart(&product_id)?;
                self.view = ViewState::Cart;
            }
            (
                ViewState::Home | ViewState::Cart | ViewState::OrderHistory,
                Intent::OpenCart,
            ) => {
                self.view = ViewState::Cart;
            }
            (ViewState::Cart, Intent::Checkout) => {
                if self.cart.is_empty() {
                    return Err(StoreError::EmptyCartCheckout);
                }
                self.view = ViewState::Checkout;
            }
            (ViewState::Checkout, Intent::PlaceOrder) => {
                self.ledger.place_order(&mut self.cart)?;
                for event in self.ledger.take_events() {
                    let DomainEvent::Order(OrderEvent::Placed {
                        order_id,
                        order_number,
                        total,
                    }) = event;
                    info!(%order_id, order_number, %total, "order placed");
                }
                self.view = ViewState::OrderSuccess;
            }
            (ViewState::OrderSuccess, Intent::TrackOrder) => {
                self.view = ViewState::OrderHistory;
            }
            (ViewState::OrderSuccess, Intent::ContinueShopping) => {
                self.view = ViewState::Home;
            }
            (
                ViewState::Home | ViewState::Cart | ViewState::OrderHistory,
                Intent::SwitchTab(tab),
            ) => {
                self.view = match tab {
                    Tab::Home => ViewState::Home,
                    Tab::Cart => ViewState::Cart,
                    Tab::Orders => ViewState::OrderHistory,
                };
            }
            (view, intent) => {
                debug!(?view, ?intent, "intent not valid in current view, ignoring");
            }
        }
        Ok(())
    }

    /// Cart mutations issued from the cart screen. These are not screen
    /// transitions; the view stays wherever it is.
    pub fn change_qty(&mut self, product_id: &str, delta: i32) {
        self.cart.change_qty(product_id, delta);
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove(product_id);
    }

    fn add_to_cart(&mut self, product_id: &str) -> Result<()> {
        // The catalog is immutable, so a ProductDetail payload always
        // resolves; the error path guards the contract anyway.
        let product = self
            .catalog
            .find(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        self.cart.add(product);
        Ok(())
    }
}
