use axum::Router;

pub mod cash_session;
pub mod catalog;
pub mod festivals;
pub mod gst;
pub mod pricing;
pub mod qr;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .merge(cash_session::router())
        .merge(catalog::router())
        .merge(pricing::router())
        .merge(festivals::router())
        .merge(gst::router())
        .merge(qr::router())
}
