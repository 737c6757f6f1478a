//! Storefront demo: drives one scripted shopping session through the
//! core, playing the part of the rendering layer (reads snapshots,
//! issues intents, never mutates state directly).

use anyhow::Result;
use storefront::{
    CategorySelection, InMemoryCatalog, Intent, Product, Session, Tab,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The injected catalog feed. Stands in for whatever real source a live
/// deployment would fetch at startup; the core only sees the parsed,
/// ordered product sequence.
const CATALOG_SEED: &str = r#"[
  {
    "id": "1",
    "title": "Wireless Noise Cancelling Headphones",
    "price": { "amount": "299.99", "currency": "USD" },
    "rating": 4.8,
    "reviews": 1240,
    "category": "Electronics",
    "description": "Industry-leading noise cancelling with up to 30-hour battery life.",
    "user_reviews": [
      { "user": "Alex D.", "rating": 5, "comment": "Best headphones I've ever owned." },
      { "user": "Sarah M.", "rating": 4, "comment": "Great sound, a bit heavy after 4 hours." }
    ]
  },
  {
    "id": "2",
    "title": "Smart 4K UHD TV - 55 Inch",
    "price": { "amount": "449.00", "currency": "USD" },
    "rating": 4.6,
    "reviews": 890,
    "category": "Electronics",
    "description": "Stunning 4K UHD resolution with built-in voice remote."
  },
  {
    "id": "3",
    "title": "Men's Cotton Casual Shirt",
    "price": { "amount": "24.99", "currency": "USD" },
    "rating": 4.2,
    "reviews": 450,
    "category": "Fashion",
    "description": "100% cotton, regular fit, breathable fabric."
  },
  {
    "id": "4",
    "title": "Stainless Steel Chef Knife",
    "price": { "amount": "45.50", "currency": "USD" },
    "rating": 4.9,
    "reviews": 210,
    "category": "Home",
    "description": "High-carbon stainless steel blade with ergonomic handle.",
    "user_reviews": [
      { "user": "ChefBoy", "rating": 5, "comment": "Razor sharp out of the box." }
    ]
  },
  {
    "id": "5",
    "title": "Best Seller Novel: The Silent Echo",
    "price": { "amount": "14.99", "currency": "USD" },
    "rating": 4.7,
    "reviews": 3300,
    "category": "Books",
    "description": "A gripping mystery thriller."
  },
  {
    "id": "6",
    "title": "Robot Vacuum Cleaner",
    "price": { "amount": "199.99", "currency": "USD" },
    "rating": 4.3,
    "reviews": 560,
    "category": "Home",
    "description": "Automated cleaning with smart mapping, app controlled."
  }
]"#;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let products: Vec<Product> = serde_json::from_str(CATALOG_SEED)?;
    tracing::info!(count = products.len(), "catalog loaded");

    let mut session = Session::new(InMemoryCatalog::new(products));

    // Browse: search and category narrow the home screen.
    session.set_search_query("knife");
    for p in session.visible_products() {
        tracing::info!(id = %p.id, title = %p.title, price = %p.price, "search hit");
    }
    session.set_search_query("");
    session.set_category(CategorySelection::All);

    // Detail -> cart: one add, then buy-now for a second unit.
    session.dispatch(Intent::SelectProduct("4".into()))?;
    if let Some(p) = session.active_product() {
        tracing::info!(title = %p.title, rating = p.rating, "viewing product");
    }
    session.dispatch(Intent::AddToCart)?;
    session.dispatch(Intent::BuyNow)?;
    tracing::info!(
        count = session.cart().count(),
        total = %session.cart().total(),
        "cart ready"
    );

    // Checkout and placement.
    session.dispatch(Intent::Checkout)?;
    session.dispatch(Intent::PlaceOrder)?;
    session.dispatch(Intent::TrackOrder)?;

    for order in session.orders() {
        println!(
            "ORD-{:04}  {}  {}  [{}]",
            order.order_number(),
            order.placed_at().format("%Y-%m-%d %H:%M"),
            order.total(),
            order.status()
        );
        for line in order.lines() {
            println!("  {} x{}  {}", line.title, line.qty, line.line_total());
        }
    }

    session.dispatch(Intent::SwitchTab(Tab::Home))?;
    tracing::info!(view = ?session.view(), "session idle");
    Ok(())
}
