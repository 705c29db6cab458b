//! QR tag construction for price tags, storefront links, and UPI payments.
//!
//! This crate builds the payloads and URLs only; image rendering is left to
//! the external QR image service the URLs point at.

pub mod builder;
pub mod encode;
pub mod scan;

pub use builder::{
    OfferQr, PaymentQr, ProductQr, ProductTag, QrLinkBuilder, ShopTag, StorefrontQr, WhatsAppQr,
};
pub use scan::{parse_qr_data, ScannedQr, UpiPayment};
