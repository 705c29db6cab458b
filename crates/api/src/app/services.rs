//! Shared application state behind the router.

use std::sync::Arc;

use smartlocal_catalog::{CatalogRepository, DemoCatalog};
use smartlocal_qr::QrLinkBuilder;

/// Service handles shared by every handler.
///
/// The catalog sits behind a trait so a real store can replace the demo
/// fixtures without touching handlers. There is no session state here: cash
/// sessions travel with the client and are rebuilt per request.
pub struct AppServices {
    pub catalog: Arc<dyn CatalogRepository>,
    pub qr: QrLinkBuilder,
}

pub fn build_services() -> AppServices {
    let catalog: Arc<dyn CatalogRepository> = Arc::new(DemoCatalog);
    let qr = QrLinkBuilder::new(catalog.shop().storefront);

    AppServices { catalog, qr }
}
