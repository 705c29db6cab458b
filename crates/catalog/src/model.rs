//! Catalog data model.
//!
//! Catalog keys are opaque strings from the seed dataset (`p1`, `o1`, ...);
//! they cross the wire in QR payloads and query strings as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The shop profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub owner: String,
    pub phone: String,
    pub address: String,
    pub gst_number: String,
    pub gst_enabled: bool,
    pub upi_id: String,
    pub storefront: String,
    pub languages: Vec<String>,
    pub timezone: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// A stocked product. Prices and costs are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub cost: i64,
    pub stock: i64,
    pub unit: String,
    pub barcode: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "UPI")]
    Upi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total: i64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

/// One point on the sales trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub sales: i64,
    pub orders: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub sales: i64,
    pub value: i64,
}

/// Dashboard roll-up served to the owner's home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    pub total_sales: i64,
    pub orders_today: i64,
    pub low_stock_count: i64,
    pub revenue: i64,
    pub sales_trend: Vec<SalesPoint>,
    pub top_products: Vec<Product>,
    pub category_breakdown: Vec<CategorySales>,
}
