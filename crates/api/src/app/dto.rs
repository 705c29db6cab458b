//! Request DTOs and JSON mapping helpers for the HTTP layer.

use serde::Deserialize;
use serde_json::{json, Value};

use smartlocal_cashdesk::CashSession;
use smartlocal_catalog::{Product, VoiceCommand};

/// Body of `POST /cash-session`; `action` selects the operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSessionActionRequest {
    pub action: String,
    pub opening_cash: Option<i64>,
    /// The caller's copy of the session state (`update` / `close`).
    pub session: Option<CashSession>,
    pub cash_sales: Option<i64>,
    pub upi_sales: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSuggestQuery {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingApproveRequest {
    pub product_id: String,
    pub new_price: i64,
}

#[derive(Debug, Deserialize)]
pub struct VoiceQuery {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BundleQuery {
    pub festival: Option<String>,
    /// Index into the festival's bundle ideas.
    #[serde(rename = "type")]
    pub bundle_type: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBundleRequest {
    pub festival: String,
    /// Products to bundle from; defaults to the whole catalog.
    pub products: Option<Vec<Product>>,
    pub custom_name: Option<String>,
    pub custom_discount: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstInvoiceQuery {
    pub order_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GstSummaryQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrProductQuery {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrGenerateRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub product_ids: Option<Vec<String>>,
}

/// Wire shape of a parsed voice command.
pub fn voice_command_to_json(command: &VoiceCommand) -> Value {
    match command {
        VoiceCommand::AddProduct {
            quantity,
            unit,
            name,
            price,
        } => json!({
            "action": "ADD_PRODUCT",
            "data": {
                "quantity": quantity,
                "unit": unit,
                "name": name,
                "price": price,
            },
        }),
        VoiceCommand::Unknown { text } => json!({
            "action": "UNKNOWN",
            "text": text,
        }),
    }
}
