//! Client-side shopping cart state.
//!
//! The cart lives entirely in the browser until checkout; only placing
//! an order sends it to the server. State is a plain value wrapped in a
//! signal and provided through context so the header badge and the cart
//! page stay in sync.

use leptos::prelude::*;
use lumera_core::ProductId;
use serde::{Deserialize, Serialize};

use crate::types::ProductSummary;

/// One product line in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductSummary,
    pub quantity: u32,
}

/// The cart contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Adds one unit of a product, merging with an existing line.
    pub fn add(&mut self, product: ProductSummary) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product,
                quantity: 1,
            }),
        }
    }

    /// Removes a product line entirely.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total in cents.
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| l.product.price_cents * i64::from(l.quantity))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Formats integer cents as a dollar price string.
#[must_use]
pub fn fmt_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Reactive cart handle provided through context.
#[derive(Clone, Copy)]
pub struct CartStore(RwSignal<Cart>);

impl CartStore {
    pub fn add(&self, product: ProductSummary) {
        self.0.update(|cart| cart.add(product));
    }

    pub fn remove(&self, product_id: ProductId) {
        self.0.update(|cart| cart.remove(product_id));
    }

    pub fn set_quantity(&self, product_id: ProductId, quantity: u32) {
        self.0.update(|cart| cart.set_quantity(product_id, quantity));
    }

    pub fn clear(&self) {
        self.0.update(Cart::clear);
    }

    /// Reads the current cart contents.
    pub fn get(&self) -> Cart {
        self.0.get()
    }

    /// Reactive unit count for the header badge.
    pub fn item_count(&self) -> u32 {
        self.0.with(Cart::item_count)
    }
}

/// Provides a fresh cart to the component tree.
pub fn provide_cart() {
    provide_context(CartStore(RwSignal::new(Cart::default())));
}

/// Returns the cart from context.
pub fn use_cart() -> CartStore {
    expect_context::<CartStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(),
            name: "Barrier Serum".to_string(),
            brand: "Lumera".to_string(),
            category: "serum".to_string(),
            price_cents,
            image_url: None,
        }
    }

    #[test]
    fn adding_the_same_product_merges_lines() {
        let mut cart = Cart::default();
        let serum = product(1000);
        cart.add(serum.clone());
        cart.add(serum);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn total_sums_across_lines() {
        let mut cart = Cart::default();
        let cleanser = product(800);
        cart.add(product(1250));
        cart.add(cleanser.clone());
        cart.add(cleanser);
        assert_eq!(cart.total_cents(), 1250 + 1600);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = Cart::default();
        let serum = product(1000);
        let id = serum.id;
        cart.add(serum);
        cart.set_quantity(id, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_overrides_the_line() {
        let mut cart = Cart::default();
        let serum = product(1000);
        let id = serum.id;
        cart.add(serum);
        cart.set_quantity(id, 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total_cents(), 5000);
    }

    #[test]
    fn removing_an_absent_product_is_a_no_op() {
        let mut cart = Cart::default();
        cart.add(product(1000));
        cart.remove(ProductId::new());
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn price_formatting_pads_cents() {
        assert_eq!(fmt_price(1205), "$12.05");
        assert_eq!(fmt_price(99), "$0.99");
        assert_eq!(fmt_price(10000), "$100.00");
    }
}
