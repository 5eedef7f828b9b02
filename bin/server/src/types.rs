//! Shared view types for the UI.
//!
//! These cross the server-function boundary, so they are plain serde
//! structs available to both the server and hydrate builds. Prices are
//! integer cents; timestamps travel as preformatted strings.

use lumera_core::{BlogPostId, ConsultationId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// Product card data for catalog listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
}

/// Full product detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub skin_types: Vec<String>,
    pub price_cents: i64,
    pub in_stock: bool,
    pub image_url: Option<String>,
}

/// Blog post card data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: BlogPostId,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published_at: String,
}

/// Full blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDetail {
    pub id: BlogPostId,
    pub title: String,
    pub body: String,
    pub author: String,
    pub published_at: String,
}

/// Account profile data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// One order in an order history listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub placed_at: String,
    pub status: String,
    pub total_cents: i64,
    pub item_count: u32,
}

/// One line of a new order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Checkout submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub lines: Vec<OrderLine>,
    pub shipping_address: String,
}

/// Skin quiz answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub skin_type: String,
    pub concerns: Vec<String>,
    pub sensitivity: String,
}

/// Products recommended from quiz answers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizRecommendation {
    pub summary: String,
    pub products: Vec<ProductSummary>,
}

/// One consultation in the doctor panel listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsultationSummary {
    pub id: ConsultationId,
    pub patient_name: String,
    pub requested_at: String,
    pub status: String,
    pub concern: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_summary_wire_shape() {
        let summary = ProductSummary {
            id: ProductId::new(),
            name: "Barrier Serum".to_string(),
            brand: "Lumera".to_string(),
            category: "serum".to_string(),
            price_cents: 3400,
            image_url: None,
        };

        let json = serde_json::to_value(&summary).expect("serialize");
        // IDs travel as bare ULID strings on the wire.
        assert!(json["id"].is_string());
        assert_eq!(json["price_cents"], 3400);
        assert_eq!(json["image_url"], serde_json::Value::Null);
    }

    #[test]
    fn new_order_roundtrip() {
        let order = NewOrder {
            lines: vec![
                OrderLine {
                    product_id: ProductId::new(),
                    quantity: 2,
                },
                OrderLine {
                    product_id: ProductId::new(),
                    quantity: 1,
                },
            ],
            shipping_address: "1 Main St".to_string(),
        };

        let json = serde_json::to_string(&order).expect("serialize");
        let parsed: NewOrder = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(order, parsed);
    }
}
