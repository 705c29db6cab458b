//! Shop catalog: shop/product/order models, the repository seam, and the
//! voice-entry parser.
//!
//! Persistence is deliberately absent. The repository trait is the seam a
//! real store would plug into; the in-memory demo implementation mirrors the
//! seed data the rest of the system is exercised against.

pub mod demo;
pub mod gst;
pub mod model;
pub mod repository;
pub mod voice;

pub use demo::DemoCatalog;
pub use gst::{
    gst_invoice, gst_monthly_summary, GstBreakdown, GstInvoice, GstLineItem, GstMonthlySummary,
};
pub use model::{
    CategorySales, DashboardAnalytics, Order, OrderItem, OrderStatus, PaymentMethod, Product,
    SalesPoint, Shop,
};
pub use repository::CatalogRepository;
pub use voice::{parse_voice_command, VoiceCommand};
