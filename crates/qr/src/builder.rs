//! Builders for each QR tag kind.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use smartlocal_catalog::{Product, Shop};
use smartlocal_core::QrTagId;

use crate::encode::percent_encode;

const QR_IMAGE_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";
const DEFAULT_BASE_URL: &str = "https://shreeganesha.smartlocal.in";
const PAYMENT_QR_TTL_MINUTES: i64 = 15;

/// Printable info block for a product price tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTag {
    pub product_name: String,
    pub price: i64,
    pub unit: String,
    pub category: String,
    pub shop_name: String,
    pub qr_code: String,
}

/// A product QR tag with live-pricing payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQr {
    pub id: QrTagId,
    pub product_id: String,
    /// JSON payload embedded in the code itself.
    pub data: String,
    pub display_url: String,
    pub qr_code_url: String,
    pub printable_data: ProductTag,
    pub created_at: DateTime<Utc>,
}

/// Printable info block for the storefront tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopTag {
    pub shop_name: String,
    pub address: String,
    pub phone: String,
    pub upi_id: String,
    pub qr_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontQr {
    pub id: QrTagId,
    pub shop_id: String,
    pub data: String,
    pub display_url: String,
    pub qr_code_url: String,
    pub printable_data: ShopTag,
    pub created_at: DateTime<Utc>,
}

/// A UPI payment QR; expires shortly after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQr {
    pub id: QrTagId,
    pub order_id: String,
    pub amount: i64,
    pub upi_url: String,
    pub qr_code_url: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppQr {
    pub id: QrTagId,
    pub phone: String,
    pub message: String,
    pub url: String,
    pub qr_code_url: String,
    pub created_at: DateTime<Utc>,
}

/// A festival-offer QR tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferQr {
    pub id: QrTagId,
    pub offer_id: String,
    pub offer_name: String,
    pub discount: i64,
    pub url: String,
    pub qr_code_url: String,
    pub valid_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Builds QR payloads and URLs rooted at the shop's storefront domain.
#[derive(Debug, Clone)]
pub struct QrLinkBuilder {
    base_url: String,
}

impl Default for QrLinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl QrLinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Product price-tag QR with the live price in the payload.
    pub fn product_qr(&self, product: &Product, shop: &Shop) -> ProductQr {
        let now = Utc::now();
        let url = format!("{}/product/{}?shop={}", self.base_url, product.id, shop.id);
        let payload = serde_json::json!({
            "type": "product",
            "productId": product.id,
            "shopId": shop.id,
            "name": product.name,
            "price": product.price,
            "url": url,
            "timestamp": now,
        });

        ProductQr {
            id: QrTagId::new(),
            product_id: product.id.clone(),
            data: payload.to_string(),
            display_url: url.clone(),
            qr_code_url: self.qr_image_url(&url, 200),
            printable_data: ProductTag {
                product_name: product.name.clone(),
                price: product.price,
                unit: product.unit.clone(),
                category: product.category.clone(),
                shop_name: shop.name.clone(),
                qr_code: url,
            },
            created_at: now,
        }
    }

    /// Storefront QR linking to the shop's public page.
    pub fn storefront_qr(&self, shop: &Shop) -> StorefrontQr {
        let now = Utc::now();
        let url = format!("{}/shop/{}", self.base_url, shop.slug);
        let payload = serde_json::json!({
            "type": "storefront",
            "shopId": shop.id,
            "name": shop.name,
            "url": url,
            "contact": shop.phone,
            "timestamp": now,
        });

        StorefrontQr {
            id: QrTagId::new(),
            shop_id: shop.id.clone(),
            data: payload.to_string(),
            display_url: url.clone(),
            qr_code_url: self.qr_image_url(&url, 200),
            printable_data: ShopTag {
                shop_name: shop.name.clone(),
                address: shop.address.clone(),
                phone: shop.phone.clone(),
                upi_id: shop.upi_id.clone(),
                qr_code: url,
            },
            created_at: now,
        }
    }

    /// UPI payment intent for one order.
    pub fn payment_qr(&self, amount: i64, order_id: &str, shop: &Shop) -> PaymentQr {
        let now = Utc::now();
        let note = format!("Payment for Order {order_id}");
        let upi_url = format!(
            "upi://pay?pa={}&pn={}&am={}&tid={}&cu=INR&tn={}",
            shop.upi_id,
            percent_encode(&shop.name),
            amount,
            order_id,
            percent_encode(&note),
        );

        PaymentQr {
            id: QrTagId::new(),
            order_id: order_id.to_string(),
            amount,
            qr_code_url: self.qr_image_url(&upi_url, 200),
            upi_url,
            expires_at: now + Duration::minutes(PAYMENT_QR_TTL_MINUTES),
            created_at: now,
        }
    }

    /// WhatsApp contact link with an optional prefilled message.
    pub fn whatsapp_qr(&self, phone: &str, message: &str) -> WhatsAppQr {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        let url = if message.is_empty() {
            format!("https://wa.me/{digits}")
        } else {
            format!("https://wa.me/{digits}?text={}", percent_encode(message))
        };

        WhatsAppQr {
            id: QrTagId::new(),
            phone: phone.to_string(),
            message: message.to_string(),
            qr_code_url: self.qr_image_url(&url, 200),
            url,
            created_at: Utc::now(),
        }
    }

    /// Festival-offer QR pointing at the shop's offer page.
    pub fn offer_qr(
        &self,
        offer_id: &str,
        offer_name: &str,
        discount: i64,
        valid_until: DateTime<Utc>,
        shop: &Shop,
    ) -> OfferQr {
        let url = format!("{}/offer/{}?shop={}", self.base_url, offer_id, shop.id);

        OfferQr {
            id: QrTagId::new(),
            offer_id: offer_id.to_string(),
            offer_name: offer_name.to_string(),
            discount,
            qr_code_url: self.qr_image_url(&url, 200),
            url,
            valid_until,
            created_at: Utc::now(),
        }
    }

    /// Product tags for a batch of products.
    pub fn bulk_product_qrs(&self, products: &[Product], shop: &Shop) -> Vec<ProductQr> {
        products.iter().map(|p| self.product_qr(p, shop)).collect()
    }

    /// URL of a rendered QR image for arbitrary data (external service).
    pub fn qr_image_url(&self, data: &str, size: u32) -> String {
        format!(
            "{QR_IMAGE_SERVICE}?size={size}x{size}&data={}&format=png&margin=10",
            percent_encode(data)
        )
    }
}
