//! Classification of scanned QR payloads.

use serde::{Deserialize, Serialize};

/// Fields of a `upi://pay` intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiPayment {
    pub payee_address: Option<String>,
    pub payee_name: Option<String>,
    pub amount: Option<String>,
    pub transaction_id: Option<String>,
    pub currency: Option<String>,
    pub transaction_note: Option<String>,
}

/// What a scanned QR string turned out to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScannedQr {
    /// One of our own JSON payloads (product/storefront tags).
    Internal { data: serde_json::Value },
    Upi { data: UpiPayment },
    Url { url: String },
    Phone { phone: String },
    Text { text: String },
}

/// Classify a scanned QR string. Never fails: unrecognized content comes
/// back as `Text`.
pub fn parse_qr_data(raw: &str) -> ScannedQr {
    if let Ok(data) = serde_json::from_str::<serde_json::Value>(raw) {
        if data.is_object() {
            return ScannedQr::Internal { data };
        }
    }

    if let Some(rest) = raw.strip_prefix("upi://") {
        return ScannedQr::Upi {
            data: parse_upi_query(rest),
        };
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return ScannedQr::Url {
            url: raw.to_string(),
        };
    }

    if let Some(number) = raw.strip_prefix("tel:") {
        return ScannedQr::Phone {
            phone: number.to_string(),
        };
    }
    if looks_like_phone(raw) {
        return ScannedQr::Phone {
            phone: raw.to_string(),
        };
    }

    ScannedQr::Text {
        text: raw.to_string(),
    }
}

fn looks_like_phone(s: &str) -> bool {
    !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'))
}

fn parse_upi_query(rest: &str) -> UpiPayment {
    let mut payment = UpiPayment::default();
    let Some((_, query)) = rest.split_once('?') else {
        return payment;
    };

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = percent_decode(value);
        match key {
            "pa" => payment.payee_address = Some(value),
            "pn" => payment.payee_name = Some(value),
            "am" => payment.amount = Some(value),
            "tid" => payment.transaction_id = Some(value),
            "cu" => payment.currency = Some(value),
            "tn" => payment.transaction_note = Some(value),
            _ => {}
        }
    }

    payment
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 3 <= bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_json_payloads_are_recognized() {
        let scanned = parse_qr_data(r#"{"type":"product","productId":"p1"}"#);
        match scanned {
            ScannedQr::Internal { data } => assert_eq!(data["type"], "product"),
            other => panic!("expected internal payload, got {other:?}"),
        }
    }

    #[test]
    fn upi_intents_are_parsed() {
        let scanned = parse_qr_data(
            "upi://pay?pa=shreeganesha@paytm&pn=Shree%20Ganesh%20Kirana&am=420&tid=ORD123&cu=INR&tn=Payment%20for%20Order%20ORD123",
        );
        match scanned {
            ScannedQr::Upi { data } => {
                assert_eq!(data.payee_address.as_deref(), Some("shreeganesha@paytm"));
                assert_eq!(data.payee_name.as_deref(), Some("Shree Ganesh Kirana"));
                assert_eq!(data.amount.as_deref(), Some("420"));
                assert_eq!(data.currency.as_deref(), Some("INR"));
            }
            other => panic!("expected upi payload, got {other:?}"),
        }
    }

    #[test]
    fn urls_phones_and_text_fall_through() {
        assert_eq!(
            parse_qr_data("https://example.in/x"),
            ScannedQr::Url { url: "https://example.in/x".to_string() }
        );
        assert_eq!(
            parse_qr_data("tel:+919876543210"),
            ScannedQr::Phone { phone: "+919876543210".to_string() }
        );
        assert_eq!(
            parse_qr_data("+91 98765 43210"),
            ScannedQr::Phone { phone: "+91 98765 43210".to_string() }
        );
        assert_eq!(
            parse_qr_data("hello world"),
            ScannedQr::Text { text: "hello world".to_string() }
        );
    }
}
