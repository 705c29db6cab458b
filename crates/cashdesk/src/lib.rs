//! Day-end cash reconciliation for the shop counter.
//!
//! This crate contains the cash-session ledger as pure, deterministic domain
//! logic (no IO, no HTTP, no storage). A [`CashSession`] is a value object:
//! callers hold it, pass it back in, and get the updated state out. The
//! ledger never keeps state across calls.

pub mod change;
pub mod demo;
pub mod denomination;
pub mod session;
pub mod validation;

pub use change::{change_breakdown, ChangeLine};
pub use demo::demo_session;
pub use denomination::{
    Denomination, DenominationKind, COIN_VALUES, DENOMINATIONS, NOTE_VALUES,
};
pub use session::{
    CashSession, CashSessionLedger, Discrepancy, DiscrepancyKind, DenominationLine,
    Reconciliation, ReconciliationStatus, SalesBreakdown, SalesShare, SessionStatus,
    SessionSummary, DEFAULT_OPENING_CASH,
};
pub use validation::{validate_cash_count, CashCountReport, ValidationLimits};
