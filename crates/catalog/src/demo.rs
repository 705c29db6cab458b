//! In-memory demo catalog for Shree Ganesh Kirana.

use chrono::{TimeZone, Utc};

use crate::model::{
    CategorySales, DashboardAnalytics, Order, OrderItem, OrderStatus, PaymentMethod, Product,
    SalesPoint, Shop,
};
use crate::repository::CatalogRepository;

/// Demo-fixture implementation of [`CatalogRepository`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCatalog;

pub const DEMO_SHOP_ID: &str = "demo-shop-123";

fn product(
    id: &str,
    name: &str,
    category: &str,
    price: i64,
    cost: i64,
    stock: i64,
    unit: &str,
    barcode: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        cost,
        stock,
        unit: unit.to_string(),
        barcode: barcode.to_string(),
    }
}

impl CatalogRepository for DemoCatalog {
    fn shop(&self) -> Shop {
        Shop {
            id: DEMO_SHOP_ID.to_string(),
            name: "Shree Ganesh Kirana".to_string(),
            slug: "shree-ganesh-kirana".to_string(),
            owner: "Ramesh Kumar".to_string(),
            phone: "+919876543210".to_string(),
            address: "Shop No. 15, Gandhi Nagar, Mumbai - 400001".to_string(),
            gst_number: "27AADCS1234F1Z5".to_string(),
            gst_enabled: true,
            upi_id: "shreeganesha@paytm".to_string(),
            storefront: "https://shreeganesha.smartlocal.in".to_string(),
            languages: vec!["hi".to_string(), "en".to_string(), "mr".to_string()],
            timezone: "Asia/Kolkata".to_string(),
            currency: "INR".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            is_active: true,
        }
    }

    fn products(&self) -> Vec<Product> {
        vec![
            product("p1", "Basmati Rice 1kg", "Grains", 180, 150, 45, "kg", "1234567890123"),
            product("p2", "Wheat Flour (Atta) 5kg", "Grains", 250, 200, 30, "kg", "1234567890124"),
            product("p3", "Sugar 1kg", "Grocery", 60, 50, 25, "kg", "1234567890125"),
            product("p4", "Sunflower Oil 1L", "Oil", 130, 110, 20, "L", "1234567890126"),
            product("p5", "Toor Dal 500g", "Pulses", 85, 70, 35, "g", "1234567890127"),
            product("p6", "Tea Powder 250g", "Beverages", 120, 95, 40, "g", "1234567890128"),
            product("p7", "Biscuits Pack", "Snacks", 25, 18, 60, "pack", "1234567890129"),
            product("p8", "Salt 1kg", "Grocery", 20, 15, 50, "kg", "1234567890130"),
            product("p9", "Chilli Powder 100g", "Spices", 45, 35, 25, "g", "1234567890131"),
            product("p10", "Turmeric Powder 200g", "Spices", 55, 42, 30, "g", "1234567890132"),
        ]
    }

    fn orders(&self) -> Vec<Order> {
        let now = Utc::now();
        vec![
            Order {
                id: "o1".to_string(),
                customer_name: "Priya Mehta".to_string(),
                items: vec![
                    OrderItem { product_id: "p1".to_string(), quantity: 2, price: 180 },
                    OrderItem { product_id: "p3".to_string(), quantity: 1, price: 60 },
                ],
                total: 420,
                status: OrderStatus::Completed,
                payment_method: PaymentMethod::Upi,
                created_at: now,
            },
            Order {
                id: "o2".to_string(),
                customer_name: "Amit Singh".to_string(),
                items: vec![OrderItem {
                    product_id: "p4".to_string(),
                    quantity: 1,
                    price: 130,
                }],
                total: 130,
                status: OrderStatus::Pending,
                payment_method: PaymentMethod::Cash,
                created_at: now,
            },
            Order {
                id: "o3".to_string(),
                customer_name: "Sunita Devi".to_string(),
                items: vec![
                    OrderItem { product_id: "p2".to_string(), quantity: 1, price: 250 },
                    OrderItem { product_id: "p5".to_string(), quantity: 2, price: 85 },
                ],
                total: 420,
                status: OrderStatus::Completed,
                payment_method: PaymentMethod::Upi,
                created_at: now,
            },
        ]
    }

    fn dashboard(&self) -> DashboardAnalytics {
        let trend = [
            ("2024-01-01", 1200, 8),
            ("2024-01-02", 1500, 12),
            ("2024-01-03", 900, 6),
            ("2024-01-04", 1800, 15),
            ("2024-01-05", 2100, 18),
            ("2024-01-06", 1600, 11),
            ("2024-01-07", 2300, 20),
        ];

        DashboardAnalytics {
            total_sales: 15600,
            orders_today: 20,
            low_stock_count: 3,
            revenue: 2300,
            sales_trend: trend
                .iter()
                .map(|&(date, sales, orders)| SalesPoint {
                    date: date.to_string(),
                    sales,
                    orders,
                })
                .collect(),
            top_products: self.products().into_iter().take(5).collect(),
            category_breakdown: vec![
                CategorySales { category: "Grains".to_string(), sales: 45, value: 4200 },
                CategorySales { category: "Oil".to_string(), sales: 30, value: 3900 },
                CategorySales { category: "Grocery".to_string(), sales: 25, value: 2100 },
            ],
        }
    }
}
