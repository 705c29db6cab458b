//! GST invoice arithmetic over catalog orders.
//!
//! The shop bills a flat 5% GST, split evenly into CGST and SGST. Amounts
//! are whole rupees; each figure is rounded independently, so the two halves
//! can exceed the combined GST by a rupee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Order, Shop};

/// Flat GST rate applied to every line, percent.
pub const GST_RATE_PERCENT: i64 = 5;

/// Demo orders carry no customer phone; invoices fall back to this one.
const FALLBACK_CUSTOMER_PHONE: &str = "+919876543220";

/// One invoice line: the order item plus its GST figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstLineItem {
    pub product_id: String,
    pub quantity: i64,
    pub price: i64,
    pub total: i64,
    /// Percent.
    pub gst_rate: i64,
    pub gst_amount: i64,
    pub total_with_gst: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub cgst: i64,
    pub sgst: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstCustomer {
    pub name: String,
    pub phone: String,
}

/// A GST invoice for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstInvoice {
    pub invoice_number: String,
    pub date: DateTime<Utc>,
    pub shop: Shop,
    pub customer: GstCustomer,
    pub items: Vec<GstLineItem>,
    pub subtotal: i64,
    pub total_gst: i64,
    pub grand_total: i64,
    pub gst_breakdown: GstBreakdown,
}

/// Monthly GST roll-up over a set of orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstMonthlySummary {
    pub month: u32,
    pub year: i32,
    pub total_sales: i64,
    pub gst_collected: i64,
    pub gst_orders: i64,
    pub average_gst_order: i64,
    pub gst_breakdown: GstBreakdown,
}

/// Build the GST invoice for one order.
pub fn gst_invoice(order: &Order, shop: Shop, now: DateTime<Utc>) -> GstInvoice {
    let items: Vec<GstLineItem> = order
        .items
        .iter()
        .map(|item| {
            let total = item.price * item.quantity;
            let gst_amount = gst_of(total);
            GstLineItem {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                price: item.price,
                total,
                gst_rate: GST_RATE_PERCENT,
                gst_amount,
                total_with_gst: total + gst_amount,
            }
        })
        .collect();

    let total_gst = gst_of(order.total);

    GstInvoice {
        invoice_number: format!("INV-{}", order.id.to_uppercase()),
        date: now,
        shop,
        customer: GstCustomer {
            name: order.customer_name.clone(),
            phone: FALLBACK_CUSTOMER_PHONE.to_string(),
        },
        items,
        subtotal: order.total,
        total_gst,
        grand_total: order.total + total_gst,
        gst_breakdown: GstBreakdown {
            cgst: half_gst(order.total),
            sgst: half_gst(order.total),
        },
    }
}

/// Roll up GST figures for a month over the given orders.
pub fn gst_monthly_summary(orders: &[Order], month: u32, year: i32) -> GstMonthlySummary {
    let total_sales: i64 = orders.iter().map(|o| o.total).sum();
    let gst_orders = orders.len() as i64;
    let average_gst_order = if gst_orders > 0 {
        (total_sales as f64 / gst_orders as f64).round() as i64
    } else {
        0
    };

    GstMonthlySummary {
        month,
        year,
        total_sales,
        gst_collected: gst_of(total_sales),
        gst_orders,
        average_gst_order,
        gst_breakdown: GstBreakdown {
            cgst: half_gst(total_sales),
            sgst: half_gst(total_sales),
        },
    }
}

fn gst_of(amount: i64) -> i64 {
    (amount as f64 * GST_RATE_PERCENT as f64 / 100.0).round() as i64
}

fn half_gst(amount: i64) -> i64 {
    (amount as f64 * GST_RATE_PERCENT as f64 / 200.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoCatalog;
    use crate::repository::CatalogRepository;

    fn order(id: &str) -> Order {
        DemoCatalog
            .orders()
            .into_iter()
            .find(|o| o.id == id)
            .unwrap()
    }

    #[test]
    fn invoice_golden_figures_for_demo_order() {
        let invoice = gst_invoice(&order("o1"), DemoCatalog.shop(), Utc::now());

        assert_eq!(invoice.invoice_number, "INV-O1");
        assert_eq!(invoice.customer.name, "Priya Mehta");
        assert_eq!(invoice.shop.gst_number, "27AADCS1234F1Z5");

        // p1: 2 × 180 = 360; p3: 1 × 60 = 60.
        assert_eq!(invoice.items[0].total, 360);
        assert_eq!(invoice.items[0].gst_amount, 18);
        assert_eq!(invoice.items[0].total_with_gst, 378);
        assert_eq!(invoice.items[1].gst_amount, 3);

        assert_eq!(invoice.subtotal, 420);
        assert_eq!(invoice.total_gst, 21);
        assert_eq!(invoice.grand_total, 441);
        assert_eq!(invoice.gst_breakdown, GstBreakdown { cgst: 11, sgst: 11 });
    }

    #[test]
    fn halves_round_independently_of_the_total() {
        let invoice = gst_invoice(&order("o1"), DemoCatalog.shop(), Utc::now());
        let halves = invoice.gst_breakdown.cgst + invoice.gst_breakdown.sgst;
        // 420 → 10.5 per half, rounded up twice.
        assert_eq!(halves, 22);
        assert_eq!(invoice.total_gst, 21);
    }

    #[test]
    fn monthly_summary_over_demo_orders() {
        let summary = gst_monthly_summary(&DemoCatalog.orders(), 3, 2026);

        assert_eq!(summary.month, 3);
        assert_eq!(summary.year, 2026);
        assert_eq!(summary.total_sales, 970);
        assert_eq!(summary.gst_collected, 49);
        assert_eq!(summary.gst_orders, 3);
        assert_eq!(summary.average_gst_order, 323);
        assert_eq!(summary.gst_breakdown, GstBreakdown { cgst: 24, sgst: 24 });
    }

    #[test]
    fn empty_month_yields_zeroes() {
        let summary = gst_monthly_summary(&[], 1, 2026);
        assert_eq!(summary.total_sales, 0);
        assert_eq!(summary.gst_collected, 0);
        assert_eq!(summary.average_gst_order, 0);
    }
}
