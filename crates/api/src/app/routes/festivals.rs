//! Festival marketing and demand radar endpoints.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use smartlocal_festivals::{
    demo_competitor_alerts, festival, generate_festival_bundle, generate_hyperlocal_alerts,
    upcoming_festivals, FestivalKey, WeatherReading,
};

use crate::app::dto::{BundleQuery, CreateBundleRequest};
use crate::app::errors::{domain_error_to_response, json_error};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/festivals/upcoming", get(upcoming))
        .route("/festivals/bundles", get(bundles))
        .route("/festivals/create-bundle", post(create_bundle))
        .route("/demand-radar", get(demand_radar))
}

async fn upcoming() -> Json<Value> {
    let today = Utc::now().date_naive();
    Json(json!({
        "success": true,
        "festivals": upcoming_festivals(today),
    }))
}

/// Suggested bundle for a festival (`festival` defaults to diwali, `type`
/// picks among its bundle ideas). `bundle` is null when too few catalog
/// products match the festival.
async fn bundles(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<BundleQuery>,
) -> Response {
    let key: FestivalKey = match query.festival.as_deref().unwrap_or("diwali").parse() {
        Ok(key) => key,
        Err(err) => return domain_error_to_response(err),
    };

    let products = services.catalog.products();
    let bundle =
        generate_festival_bundle(key, &products, query.bundle_type.unwrap_or(0), Utc::now());

    Json(json!({
        "success": true,
        "festival": festival(key),
        "bundle": bundle,
    }))
    .into_response()
}

async fn create_bundle(
    Extension(services): Extension<Arc<AppServices>>,
    Json(req): Json<CreateBundleRequest>,
) -> Response {
    let key: FestivalKey = match req.festival.parse() {
        Ok(key) => key,
        Err(err) => return domain_error_to_response(err),
    };

    let products = req
        .products
        .unwrap_or_else(|| services.catalog.products());
    let Some(mut bundle) = generate_festival_bundle(key, &products, 0, Utc::now()) else {
        return json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invariant_violation",
            "not enough matching products for a bundle",
        );
    };

    if let Some(name) = req.custom_name {
        bundle.name = name;
    }
    if let Some(discount) = req.custom_discount {
        bundle.discount = discount;
    }

    // Printable offer tag for the finished bundle.
    let shop = services.catalog.shop();
    let offer_qr = services.qr.offer_qr(
        &bundle.id.to_string(),
        &bundle.name,
        bundle.discount,
        bundle.valid_until,
        &shop,
    );

    tracing::info!(festival = key.as_str(), bundle = %bundle.name, "festival bundle created");

    Json(json!({
        "success": true,
        "bundle": bundle,
        "offerQr": offer_qr,
        "message": "Festival bundle created successfully",
    }))
    .into_response()
}

/// Hyperlocal alert feed from a demo weather reading, demo competitor
/// observations, and live catalog stock.
async fn demand_radar(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    let weather = WeatherReading {
        temperature: 38,
        condition: "sunny".to_string(),
    };
    let alerts = generate_hyperlocal_alerts(
        &weather,
        &demo_competitor_alerts(),
        &services.catalog.products(),
    );

    Json(json!({
        "success": true,
        "weather": weather,
        "alerts": alerts,
        "lastUpdated": Utc::now(),
    }))
}
