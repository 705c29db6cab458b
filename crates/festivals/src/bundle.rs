//! Festival bundle generation: match catalog products against a festival's
//! keywords and price the bundle with its discount.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use smartlocal_catalog::Product;
use smartlocal_core::BundleId;

use crate::calendar::{festival, FestivalInfo, FestivalKey};

/// Ready-to-send WhatsApp campaign copy for a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppMessage {
    pub message: String,
    pub short_message: String,
    pub image: String,
    pub metadata: WhatsAppMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppMetadata {
    pub festival: String,
    pub bundle: String,
    pub price: i64,
    pub discount: i64,
}

/// A priced festival bundle built from matched catalog products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalBundle {
    pub id: BundleId,
    pub festival: FestivalKey,
    pub name: String,
    pub description: String,
    pub products: Vec<Product>,
    pub original_price: i64,
    /// Percent.
    pub discount: i64,
    pub discount_amount: i64,
    pub final_price: i64,
    pub savings: i64,
    /// Expected margin of the chosen bundle idea, percent.
    pub margin: i64,
    pub whatsapp_template: WhatsAppMessage,
    pub valid_until: DateTime<Utc>,
}

/// Products whose names contain any part of any festival keyword
/// (hyphenated keywords match per part, so "dry-fruits" matches "fruits").
pub fn match_products_for_festival(key: FestivalKey, available: &[Product]) -> Vec<Product> {
    let info = festival(key);
    available
        .iter()
        .filter(|product| {
            let name = product.name.to_lowercase();
            info.products
                .iter()
                .any(|keyword| keyword.split('-').any(|part| name.contains(part)))
        })
        .cloned()
        .collect()
}

/// Build a bundle for a festival from the available products.
///
/// Bundles need at least two matched products and take at most four. An
/// out-of-range `bundle_type` falls back to the festival's first idea.
/// Offers stay valid for 30 days from `now`.
pub fn generate_festival_bundle(
    key: FestivalKey,
    available: &[Product],
    bundle_type: usize,
    now: DateTime<Utc>,
) -> Option<FestivalBundle> {
    let info = festival(key);
    let idea = info
        .bundle_ideas
        .get(bundle_type)
        .or_else(|| info.bundle_ideas.first())?;

    let matched = match_products_for_festival(key, available);
    if matched.len() < 2 {
        return None;
    }

    let products: Vec<Product> = matched.into_iter().take(4).collect();
    let original_price: i64 = products.iter().map(|p| p.price).sum();
    let discount_amount =
        (original_price as f64 * info.discount as f64 / 100.0).round() as i64;
    let final_price = original_price - discount_amount;

    Some(FestivalBundle {
        id: BundleId::new(),
        festival: key,
        name: idea.name.to_string(),
        description: idea.description.to_string(),
        products,
        original_price,
        discount: info.discount,
        discount_amount,
        final_price,
        savings: discount_amount,
        margin: idea.margin,
        whatsapp_template: whatsapp_message(info, idea.name, final_price),
        valid_until: now + Duration::days(30),
    })
}

fn whatsapp_message(info: &FestivalInfo, bundle_name: &str, price: i64) -> WhatsAppMessage {
    let t = &info.whatsapp;

    let message = format!(
        "{greeting}\n\n{body}\n\n🎁 *{bundle_name}* - Only ₹{price}\n{emoji}\n\n{cta}\n\nHurry! Limited time offer.\n\nOrder now: Call +919876543210\nVisit: Shree Ganesh Kirana\n\n{emoji}",
        greeting = t.greeting,
        body = t.message,
        emoji = t.emoji,
        cta = t.cta,
    );

    WhatsAppMessage {
        message,
        short_message: format!(
            "{} {bundle_name} - ₹{price} {}\n{}! Call +919876543210",
            info.emoji, t.emoji, t.cta
        ),
        image: format!("/festival-images/{}.jpg", info.name.to_lowercase()),
        metadata: WhatsAppMetadata {
            festival: info.name.to_string(),
            bundle: bundle_name.to_string(),
            price,
            discount: info.discount,
        },
    }
}
