//! Festival marketing: the festival calendar, bundle generation, and the
//! hyperlocal demand radar.

pub mod bundle;
pub mod calendar;
pub mod radar;

pub use bundle::{
    generate_festival_bundle, match_products_for_festival, FestivalBundle, WhatsAppMessage,
};
pub use calendar::{
    festival, upcoming_festivals, BundleIdea, FestivalInfo, FestivalKey, UpcomingFestival,
    WhatsAppTemplate,
};
pub use radar::{
    demo_competitor_alerts, generate_hyperlocal_alerts, AlertSeverity, CompetitorAlert,
    DemandAlert, DemandAlertKind, WeatherReading,
};
