//! Hyperlocal demand radar: weather spikes, competitor price moves, and low
//! stock, rolled into one prioritized alert feed.

use serde::{Deserialize, Serialize};

use smartlocal_catalog::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandAlertKind {
    Weather,
    Competitor,
    Inventory,
}

/// One alert in the radar feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandAlert {
    #[serde(rename = "type")]
    pub kind: DemandAlertKind,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub action: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub products: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product: Option<String>,
    pub impact: AlertSeverity,
}

/// Current weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: i64,
    pub condition: String,
}

/// A competitor price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAlert {
    pub competitor: String,
    pub product: String,
    pub our_price: i64,
    pub their_price: i64,
    /// theirPrice − ourPrice; negative means they undercut us.
    pub difference: i64,
    pub action: String,
    pub urgency: AlertSeverity,
}

/// Products that surge when the temperature crosses 35°C.
pub const HOT_WEATHER_PRODUCTS: [&str; 5] =
    ["cold-drinks", "ice-cream", "water", "coconut-water", "lassi"];

const LOW_STOCK_THRESHOLD: i64 = 10;

/// Demo competitor observations (no live price tracking exists).
pub fn demo_competitor_alerts() -> Vec<CompetitorAlert> {
    vec![
        CompetitorAlert {
            competitor: "Mumbai Grocery Store".to_string(),
            product: "Sugar 1kg".to_string(),
            our_price: 60,
            their_price: 55,
            difference: -5,
            action: "Consider price adjustment".to_string(),
            urgency: AlertSeverity::High,
        },
        CompetitorAlert {
            competitor: "Local Kirana".to_string(),
            product: "Rice 1kg".to_string(),
            our_price: 180,
            their_price: 185,
            difference: 5,
            action: "Maintain competitive advantage".to_string(),
            urgency: AlertSeverity::Low,
        },
        CompetitorAlert {
            competitor: "Super Mart".to_string(),
            product: "Oil 1L".to_string(),
            our_price: 130,
            their_price: 125,
            difference: -5,
            action: "Monitor closely".to_string(),
            urgency: AlertSeverity::Medium,
        },
    ]
}

/// Build the alert feed, most severe first. Only high-urgency competitor
/// observations make the feed; inventory alerts fire below
/// 10 units.
pub fn generate_hyperlocal_alerts(
    weather: &WeatherReading,
    competitors: &[CompetitorAlert],
    inventory: &[Product],
) -> Vec<DemandAlert> {
    let mut alerts = Vec::new();

    if weather.temperature > 35 {
        alerts.push(DemandAlert {
            kind: DemandAlertKind::Weather,
            severity: AlertSeverity::High,
            title: "🌡️ Heat Wave Alert".to_string(),
            message: format!(
                "{}°C today! Cold drinks demand expected to surge by 30%",
                weather.temperature
            ),
            action: "Stock up on beverages and ice cream".to_string(),
            products: HOT_WEATHER_PRODUCTS.iter().map(|s| s.to_string()).collect(),
            product: None,
            impact: AlertSeverity::High,
        });
    }

    for comp in competitors {
        if comp.urgency == AlertSeverity::High {
            let direction = if comp.difference > 0 { "more" } else { "less" };
            alerts.push(DemandAlert {
                kind: DemandAlertKind::Competitor,
                severity: comp.urgency,
                title: "💰 Price Alert".to_string(),
                message: format!(
                    "{} selling {} at ₹{} (₹{} {direction})",
                    comp.competitor,
                    comp.product,
                    comp.their_price,
                    comp.difference.abs(),
                ),
                action: comp.action.clone(),
                products: Vec::new(),
                product: Some(comp.product.clone()),
                impact: AlertSeverity::Medium,
            });
        }
    }

    for product in inventory.iter().filter(|p| p.stock < LOW_STOCK_THRESHOLD) {
        alerts.push(DemandAlert {
            kind: DemandAlertKind::Inventory,
            severity: AlertSeverity::Medium,
            title: "📦 Low Stock Warning".to_string(),
            message: format!(
                "{} running low - only {} {} left",
                product.name, product.stock, product.unit
            ),
            action: "Reorder immediately".to_string(),
            products: Vec::new(),
            product: Some(product.name.clone()),
            impact: AlertSeverity::High,
        });
    }

    alerts.sort_by(|a, b| b.severity.cmp(&a.severity));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartlocal_catalog::{CatalogRepository, DemoCatalog};

    fn hot() -> WeatherReading {
        WeatherReading {
            temperature: 38,
            condition: "sunny".to_string(),
        }
    }

    fn mild() -> WeatherReading {
        WeatherReading {
            temperature: 28,
            condition: "cloudy".to_string(),
        }
    }

    #[test]
    fn heat_wave_triggers_weather_alert() {
        let alerts = generate_hyperlocal_alerts(&hot(), &[], &[]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, DemandAlertKind::Weather);
        assert!(alerts[0].message.contains("38°C"));
        assert_eq!(alerts[0].products.len(), 5);
    }

    #[test]
    fn only_high_urgency_competitors_surface() {
        let alerts = generate_hyperlocal_alerts(&mild(), &demo_competitor_alerts(), &[]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, DemandAlertKind::Competitor);
        assert!(alerts[0].message.contains("₹5 less"));
    }

    #[test]
    fn low_stock_alerts_below_threshold() {
        let mut products = DemoCatalog.products();
        products[0].stock = 4;
        let alerts = generate_hyperlocal_alerts(&mild(), &[], &products);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, DemandAlertKind::Inventory);
        assert!(alerts[0].message.contains("only 4 kg left"));
    }

    #[test]
    fn feed_is_sorted_most_severe_first() {
        let mut products = DemoCatalog.products();
        products[0].stock = 2;
        let alerts =
            generate_hyperlocal_alerts(&hot(), &demo_competitor_alerts(), &products);

        assert!(alerts.len() >= 3);
        assert!(alerts.windows(2).all(|w| w[0].severity >= w[1].severity));
        assert_eq!(alerts[0].severity, AlertSeverity::High);
    }
}
