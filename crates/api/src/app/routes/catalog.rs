//! Shop, product, order and analytics endpoints, plus voice stock entry.

use std::sync::Arc;

use axum::extract::Query;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};

use smartlocal_catalog::parse_voice_command;

use crate::app::dto::{voice_command_to_json, VoiceQuery};
use crate::app::services::AppServices;

const DEMO_TRANSCRIPT: &str = "add 5 kg rice at 70 rupees";

pub fn router() -> Router {
    Router::new()
        .route("/shop/demo", get(demo_shop))
        .route("/products", get(products))
        .route("/orders", get(orders))
        .route("/analytics/dashboard", get(dashboard))
        .route("/voice/parse", get(parse_voice))
}

async fn demo_shop(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "shop": services.catalog.shop(),
    }))
}

async fn products(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "products": services.catalog.products(),
    }))
}

async fn orders(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "orders": services.catalog.orders(),
    }))
}

async fn dashboard(Extension(services): Extension<Arc<AppServices>>) -> Json<Value> {
    Json(json!({
        "success": true,
        "analytics": services.catalog.dashboard(),
    }))
}

/// Parse a voice transcript into a stock command. Without `text` a demo
/// transcript is parsed so the feature can be exercised from a browser.
async fn parse_voice(Query(query): Query<VoiceQuery>) -> Json<Value> {
    let transcript = query.text.unwrap_or_else(|| DEMO_TRANSCRIPT.to_string());
    let parsed = parse_voice_command(&transcript);

    Json(json!({
        "success": true,
        "transcript": transcript,
        "parsed": voice_command_to_json(&parsed),
    }))
}
