//! Day-end cash session endpoints.
//!
//! The server holds no session state: the client sends its copy of the
//! session back with every `update`/`close`, and the ledger recomputes the
//! derived figures before applying the action.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use smartlocal_cashdesk::{demo_session, CashSessionLedger};

use crate::app::dto::CashSessionActionRequest;
use crate::app::errors::json_error;

pub fn router() -> Router {
    Router::new().route("/cash-session", get(current_session).post(session_action))
}

/// Demo summary so the reconciliation screen renders without a live session.
async fn current_session() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "session": demo_session(),
    }))
}

async fn session_action(Json(req): Json<CashSessionActionRequest>) -> Response {
    match req.action.as_str() {
        "start" => {
            let ledger = CashSessionLedger::initialize(req.opening_cash);
            tracing::info!(
                opening_cash = ledger.session().opening_cash,
                "cash session started"
            );
            Json(json!({
                "success": true,
                "session": ledger.session(),
                "message": "Cash session started",
            }))
            .into_response()
        }
        "update" => {
            let Some(session) = req.session else {
                return json_error(
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    "update requires a session",
                );
            };
            let mut ledger = CashSessionLedger::resume(session);
            ledger.record_sales(req.cash_sales, req.upi_sales);
            Json(json!({
                "success": true,
                "session": ledger.session(),
            }))
            .into_response()
        }
        "close" => {
            let Some(session) = req.session else {
                return json_error(
                    StatusCode::BAD_REQUEST,
                    "validation_error",
                    "close requires a session",
                );
            };
            let mut ledger = CashSessionLedger::resume(session);
            let summary = ledger.close(req.notes.unwrap_or_default());
            tracing::info!(
                difference = summary.session.difference,
                status = ?summary.reconciliation.status,
                "cash session closed"
            );
            Json(json!({
                "success": true,
                "summary": summary,
                "message": "Cash session closed successfully",
            }))
            .into_response()
        }
        other => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("unknown action: {other}"),
        ),
    }
}
