//! Rule-based price suggestions.
//!
//! A deterministic heuristic: the base price is adjusted by competition,
//! stock level, demand, and weather, and the suggestion carries a margin
//! figure plus human-readable reasoning. Confidence is derived from how many
//! factors actually applied, so the same inputs always give the same answer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    Low,
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Normal,
    Hot,
    Cold,
    Rainy,
}

/// Market inputs to the heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceFactors {
    /// How many rupees a competitor undercuts us by. Zero means no signal.
    pub competition: f64,
    pub stock_level: StockLevel,
    pub demand: DemandLevel,
    pub weather: Weather,
    /// Lowercase product category; drives weather-sensitive adjustments.
    pub category: Option<String>,
}

/// The heuristic's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSuggestion {
    /// Rupees, 2 dp.
    pub suggested_price: f64,
    /// 0.70–0.94, more applied factors → more confident.
    pub confidence: f64,
    /// Percent change versus the base price.
    pub margin: f64,
    pub reasoning: String,
}

/// Suggest a price for `base_price` (whole rupees) under the given factors.
pub fn suggest_price(base_price: i64, factors: &PriceFactors) -> PriceSuggestion {
    let base = base_price as f64;
    let mut suggested = base;

    // Competition: undercut, but never below 80% of base.
    if factors.competition > 0.0 {
        suggested = (suggested - factors.competition).max(base * 0.8);
    }

    match factors.stock_level {
        StockLevel::Low => suggested *= 1.1,
        StockLevel::High => suggested *= 0.95,
        StockLevel::Normal => {}
    }

    match factors.demand {
        DemandLevel::High => suggested *= 1.05,
        DemandLevel::Low => suggested *= 0.95,
        DemandLevel::Normal => {}
    }

    let beverage = factors.category.as_deref() == Some("beverages");
    if factors.weather == Weather::Hot && beverage {
        suggested *= 1.03;
    }

    let reasons = applied_reasons(factors);
    let confidence = 0.7 + 0.06 * reasons.len() as f64;
    let margin = if base > 0.0 {
        (suggested - base) / base * 100.0
    } else {
        0.0
    };

    PriceSuggestion {
        suggested_price: round2(suggested),
        confidence: round2(confidence),
        margin: round2(margin),
        reasoning: if reasons.is_empty() {
            "Standard pricing".to_string()
        } else {
            reasons.join(", ")
        },
    }
}

fn applied_reasons(factors: &PriceFactors) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if factors.competition > 0.0 {
        reasons.push("Competitor price adjustment");
    }
    if factors.stock_level == StockLevel::Low {
        reasons.push("Low stock premium");
    }
    if factors.demand == DemandLevel::High {
        reasons.push("High demand surge");
    }
    if factors.weather == Weather::Hot {
        reasons.push("Weather-driven demand");
    }
    reasons
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
