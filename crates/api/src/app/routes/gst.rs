//! GST invoice and monthly summary endpoints.

use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::{Datelike, Utc};
use serde_json::{json, Value};

use smartlocal_catalog::{gst_invoice, gst_monthly_summary};

use crate::app::dto::{GstInvoiceQuery, GstSummaryQuery};
use crate::app::errors::json_error;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/gst/invoice", get(invoice))
        .route("/gst/summary", get(summary))
}

/// Invoice for one order; `orderId` defaults to the first demo order.
async fn invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<GstInvoiceQuery>,
) -> Response {
    let order_id = query.order_id.unwrap_or_else(|| "o1".to_string());
    let Some(order) = services
        .catalog
        .orders()
        .into_iter()
        .find(|o| o.id == order_id)
    else {
        return json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("unknown order: {order_id}"),
        );
    };

    let invoice = gst_invoice(&order, services.catalog.shop(), Utc::now());
    Json(json!({
        "success": true,
        "invoice": invoice,
    }))
    .into_response()
}

/// Monthly roll-up; `month`/`year` default to the current date.
async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<GstSummaryQuery>,
) -> Json<Value> {
    let now = Utc::now();
    let month = query.month.unwrap_or_else(|| now.month());
    let year = query.year.unwrap_or_else(|| now.year());

    let summary = gst_monthly_summary(&services.catalog.orders(), month, year);
    Json(json!({
        "success": true,
        "summary": summary,
    }))
}
