//! QR tag endpoints.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{json, Value};

use smartlocal_catalog::Product;

use crate::app::dto::{QrGenerateRequest, QrProductQuery};
use crate::app::errors::json_error;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/qr/product", get(product_qr))
        .route("/qr/shop", get(shop_qr))
        .route("/qr/bulk", get(bulk_demo))
        .route("/qr/generate", post(generate))
}

async fn product_qr(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<QrProductQuery>,
) -> Response {
    let Some(product) = services.catalog.product(&query.product_id) else {
        return json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("unknown product: {}", query.product_id),
        );
    };

    let shop = services.catalog.shop();
    Json(json!({
        "success": true,
        "qr": services.qr.product_qr(&product, &shop),
    }))
    .into_response()
}

async fn shop_qr(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    let shop = services.catalog.shop();
    Json(json!({
        "success": true,
        "qr": services.qr.storefront_qr(&shop),
    }))
}

/// One of each QR kind, for the print-preview screen.
async fn bulk_demo(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    let shop = services.catalog.shop();
    let products = services.catalog.products();
    let sample = &products[..products.len().min(3)];

    let product_qrs = services.qr.bulk_product_qrs(sample, &shop);
    let shop_qr = services.qr.storefront_qr(&shop);
    let payment_qr = services.qr.payment_qr(420, "ORD123", &shop);
    let whatsapp_qr = services
        .qr
        .whatsapp_qr(&shop.phone, "Hello! I would like to place an order.");

    Json(json!({
        "success": true,
        "productQRs": product_qrs,
        "shopQR": shop_qr,
        "paymentQR": payment_qr,
        "whatsappQR": whatsapp_qr,
    }))
}

async fn generate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(req): Json<QrGenerateRequest>,
) -> Response {
    match req.kind.as_str() {
        "bulk-products" => {
            let shop = services.catalog.shop();
            let ids = req.product_ids.unwrap_or_default();
            let products: Vec<Product> = services
                .catalog
                .products()
                .into_iter()
                .filter(|p| ids.contains(&p.id))
                .collect();

            let codes = services.qr.bulk_product_qrs(&products, &shop);
            let count = codes.len();
            Json(json!({
                "success": true,
                "qrCodes": codes,
                "count": count,
            }))
            .into_response()
        }
        other => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("unknown qr type: {other}"),
        ),
    }
}
