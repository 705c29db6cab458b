//! Price suggestion endpoints.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::json;

use smartlocal_pricing::{suggest_price, PriceFactors, StockLevel};

use crate::app::dto::{PricingApproveRequest, PricingSuggestQuery};
use crate::app::errors::json_error;
use crate::app::services::AppServices;

/// Below this many units a product counts as low stock for pricing.
const LOW_STOCK_FOR_PRICING: i64 = 20;

pub fn router() -> Router {
    Router::new()
        .route("/pricing/suggest", get(suggest))
        .route("/pricing/approve", post(approve))
}

async fn suggest(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<PricingSuggestQuery>,
) -> Response {
    let Some(product) = services.catalog.product(&query.product_id) else {
        return json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("unknown product: {}", query.product_id),
        );
    };

    let factors = PriceFactors {
        stock_level: if product.stock < LOW_STOCK_FOR_PRICING {
            StockLevel::Low
        } else {
            StockLevel::Normal
        },
        category: Some(product.category.to_lowercase()),
        ..PriceFactors::default()
    };
    let suggestion = suggest_price(product.price, &factors);

    Json(json!({
        "success": true,
        "productId": product.id,
        "productName": product.name,
        "currentPrice": product.price,
        "suggestion": suggestion,
    }))
    .into_response()
}

/// Owner accepts a suggested price. The demo catalog is read-only, so the
/// approval is acknowledged and logged rather than persisted.
async fn approve(Json(req): Json<PricingApproveRequest>) -> Response {
    if req.new_price <= 0 {
        return json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "newPrice must be positive",
        );
    }

    tracing::info!(
        product_id = %req.product_id,
        new_price = req.new_price,
        "price approved"
    );

    Json(json!({
        "success": true,
        "productId": req.product_id,
        "newPrice": req.new_price,
        "message": "Price updated successfully",
    }))
    .into_response()
}
