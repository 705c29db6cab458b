//! Repository seam over catalog data.

use crate::model::{DashboardAnalytics, Order, Product, Shop};

/// Read access to the shop's catalog.
///
/// Implementations must be cheap to call; the HTTP layer holds one behind an
/// `Arc` and queries it per request.
pub trait CatalogRepository: Send + Sync {
    fn shop(&self) -> Shop;

    fn products(&self) -> Vec<Product>;

    fn product(&self, id: &str) -> Option<Product> {
        self.products().into_iter().find(|p| p.id == id)
    }

    fn orders(&self) -> Vec<Order>;

    fn dashboard(&self) -> DashboardAnalytics;
}
