//! The festival calendar: static marketing data per festival.

use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use smartlocal_core::DomainError;

/// The festivals the shop runs campaigns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FestivalKey {
    Diwali,
    Holi,
    Eid,
    Ramzan,
    Pongal,
    Navratri,
}

impl FestivalKey {
    pub const ALL: [FestivalKey; 6] = [
        FestivalKey::Diwali,
        FestivalKey::Holi,
        FestivalKey::Eid,
        FestivalKey::Ramzan,
        FestivalKey::Pongal,
        FestivalKey::Navratri,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FestivalKey::Diwali => "diwali",
            FestivalKey::Holi => "holi",
            FestivalKey::Eid => "eid",
            FestivalKey::Ramzan => "ramzan",
            FestivalKey::Pongal => "pongal",
            FestivalKey::Navratri => "navratri",
        }
    }
}

impl FromStr for FestivalKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diwali" => Ok(FestivalKey::Diwali),
            "holi" => Ok(FestivalKey::Holi),
            "eid" => Ok(FestivalKey::Eid),
            "ramzan" => Ok(FestivalKey::Ramzan),
            "pongal" => Ok(FestivalKey::Pongal),
            "navratri" => Ok(FestivalKey::Navratri),
            other => Err(DomainError::validation(format!("unknown festival: {other}"))),
        }
    }
}

/// A pre-designed bundle recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BundleIdea {
    pub name: &'static str,
    pub products: &'static [&'static str],
    pub description: &'static str,
    /// Expected margin, percent.
    pub margin: i64,
}

/// WhatsApp campaign copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WhatsAppTemplate {
    pub greeting: &'static str,
    pub message: &'static str,
    pub cta: &'static str,
    pub emoji: &'static str,
}

/// Static marketing data for one festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalInfo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub period: &'static str,
    /// Product keywords; hyphenated keywords match on any part.
    pub products: &'static [&'static str],
    /// Bundle discount, percent.
    pub discount: i64,
    pub bundle_ideas: &'static [BundleIdea],
    pub whatsapp: WhatsAppTemplate,
    /// Approximate next occurrence as (month, day); lunar festivals shift
    /// year to year, this is campaign-planning precision only.
    pub occurrence: (u32, u32),
}

/// Look up the calendar entry for a festival.
pub fn festival(key: FestivalKey) -> &'static FestivalInfo {
    match key {
        FestivalKey::Diwali => &DIWALI,
        FestivalKey::Holi => &HOLI,
        FestivalKey::Eid => &EID,
        FestivalKey::Ramzan => &RAMZAN,
        FestivalKey::Pongal => &PONGAL,
        FestivalKey::Navratri => &NAVRATRI,
    }
}

static DIWALI: FestivalInfo = FestivalInfo {
    name: "Diwali",
    emoji: "🪔",
    period: "October-November",
    products: &["sweets", "dry-fruits", "oil", "rice", "diyas", "decorative"],
    discount: 15,
    bundle_ideas: &[
        BundleIdea {
            name: "Diwali Sweets Special",
            products: &["sweets", "dry-fruits", "oil"],
            description: "Traditional sweets with premium dry fruits and cooking oil",
            margin: 12,
        },
        BundleIdea {
            name: "Puja Essentials Pack",
            products: &["oil", "rice", "diyas"],
            description: "Everything needed for Diwali puja rituals",
            margin: 10,
        },
        BundleIdea {
            name: "Family Celebration Bundle",
            products: &["sweets", "decorative", "dry-fruits"],
            description: "Complete celebration pack for the whole family",
            margin: 15,
        },
    ],
    whatsapp: WhatsAppTemplate {
        greeting: "🪔 Diwali ki Shubh Kamnayein! 🪔",
        message: "Light up your celebrations with our special Diwali offers!",
        cta: "Order Now & Get FREE Delivery",
        emoji: "✨🎊🪔",
    },
    occurrence: (10, 20),
};

static HOLI: FestivalInfo = FestivalInfo {
    name: "Holi",
    emoji: "🎨",
    period: "March",
    products: &["colors", "sweets", "snacks", "beverages", "traditional-sweets"],
    discount: 12,
    bundle_ideas: &[
        BundleIdea {
            name: "Holi Colors Combo",
            products: &["colors", "snacks", "beverages"],
            description: "Vibrant colors with delicious snacks and refreshing drinks",
            margin: 14,
        },
        BundleIdea {
            name: "Sweet Celebrations Pack",
            products: &["traditional-sweets", "snacks"],
            description: "Traditional sweets and savory snacks for Holi parties",
            margin: 11,
        },
    ],
    whatsapp: WhatsAppTemplate {
        greeting: "🎨 Holi Hai! 🌈",
        message: "Add colors to your celebration with our festive collection!",
        cta: "Shop Holi Specials",
        emoji: "🎊🎨🌈",
    },
    occurrence: (3, 14),
};

static EID: FestivalInfo = FestivalInfo {
    name: "Eid ul-Fitr",
    emoji: "🌙",
    period: "Based on Lunar Calendar",
    products: &["dates", "dry-fruits", "sweets", "rice", "meat", "vermicelli"],
    discount: 10,
    bundle_ideas: &[
        BundleIdea {
            name: "Iftar Special",
            products: &["dates", "dry-fruits", "sweets"],
            description: "Premium dates and sweets for breaking fast",
            margin: 13,
        },
        BundleIdea {
            name: "Eid Feast Pack",
            products: &["rice", "meat", "vermicelli"],
            description: "Essential ingredients for Eid feast preparation",
            margin: 9,
        },
    ],
    whatsapp: WhatsAppTemplate {
        greeting: "🌙 Eid Mubarak! 🕌",
        message: "Celebrate Eid with our premium festive collection!",
        cta: "Order Eid Specials",
        emoji: "✨🌙🎊",
    },
    occurrence: (3, 31),
};

static RAMZAN: FestivalInfo = FestivalInfo {
    name: "Ramzan",
    emoji: "🕌",
    period: "Based on Lunar Calendar",
    products: &["dates", "oil", "rice", "spices", "flour", "lentils"],
    discount: 8,
    bundle_ideas: &[
        BundleIdea {
            name: "Sehri Essentials",
            products: &["dates", "flour", "oil"],
            description: "Pre-dawn meal essentials for healthy sehri",
            margin: 10,
        },
        BundleIdea {
            name: "Iftar Delights",
            products: &["dates", "oil", "spices"],
            description: "Traditional iftar preparation ingredients",
            margin: 12,
        },
    ],
    whatsapp: WhatsAppTemplate {
        greeting: "🕌 Ramzan Kareem! 🌙",
        message: "Blessed Ramzan with our special collection!",
        cta: "Shop Ramzan Essentials",
        emoji: "🌙✨🕌",
    },
    occurrence: (3, 1),
};

static PONGAL: FestivalInfo = FestivalInfo {
    name: "Pongal",
    emoji: "🌾",
    period: "January",
    products: &["rice", "jaggery", "coconut", "ghee", "cashews", "raisins"],
    discount: 10,
    bundle_ideas: &[
        BundleIdea {
            name: "Traditional Pongal Kit",
            products: &["rice", "jaggery", "ghee"],
            description: "Traditional ingredients for authentic Pongal preparation",
            margin: 11,
        },
        BundleIdea {
            name: "Sweet Pongal Special",
            products: &["jaggery", "coconut", "cashews", "raisins"],
            description: "Premium ingredients for delicious sweet Pongal",
            margin: 14,
        },
    ],
    whatsapp: WhatsAppTemplate {
        greeting: "🌾 Thai Pirandhal Vazhi Pirakkum! 🎊",
        message: "Celebrate Pongal with our traditional collection!",
        cta: "Order Pongal Specials",
        emoji: "🌾🎊✨",
    },
    occurrence: (1, 14),
};

static NAVRATRI: FestivalInfo = FestivalInfo {
    name: "Navratri",
    emoji: "💃",
    period: "September-October",
    products: &["fruits", "milk", "nuts", "rock-salt", "buckwheat", "water-chestnut"],
    discount: 12,
    bundle_ideas: &[
        BundleIdea {
            name: "Fasting Essentials",
            products: &["fruits", "milk", "nuts"],
            description: "Nutritious fasting foods for Navratri",
            margin: 13,
        },
        BundleIdea {
            name: "Vrat Special Kit",
            products: &["rock-salt", "buckwheat", "water-chestnut"],
            description: "Special ingredients allowed during Navratri fasting",
            margin: 15,
        },
    ],
    whatsapp: WhatsAppTemplate {
        greeting: "💃 Navratri Ki Shubhkamnayein! 🎊",
        message: "Celebrate nine divine nights with our fasting collection!",
        cta: "Shop Navratri Specials",
        emoji: "💃🎊✨",
    },
    occurrence: (9, 22),
};

/// A festival with its distance from a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingFestival {
    pub key: FestivalKey,
    pub name: String,
    pub emoji: String,
    pub period: String,
    pub discount: i64,
    pub days_until: i64,
    pub is_upcoming: bool,
}

/// All festivals ordered by how soon they occur after `today`, using the
/// calendar's approximate occurrence dates (wrapping into next year when the
/// date has passed).
pub fn upcoming_festivals(today: NaiveDate) -> Vec<UpcomingFestival> {
    let mut festivals: Vec<UpcomingFestival> = FestivalKey::ALL
        .iter()
        .map(|&key| {
            let info = festival(key);
            let days_until = days_until(today, info.occurrence);
            UpcomingFestival {
                key,
                name: info.name.to_string(),
                emoji: info.emoji.to_string(),
                period: info.period.to_string(),
                discount: info.discount,
                days_until,
                is_upcoming: days_until <= 60,
            }
        })
        .collect();

    festivals.sort_by_key(|f| f.days_until);
    festivals
}

fn days_until(today: NaiveDate, (month, day): (u32, u32)) -> i64 {
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day);
    let occurrence = match this_year {
        Some(date) if date >= today => date,
        // Passed (or invalid for this year, e.g. Feb 29): wrap to next year.
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            .unwrap_or_else(|| today + chrono::Duration::days(365)),
    };
    (occurrence - today).num_days()
}
