//! Cash session state, mutations, and the reconciliation summary.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use smartlocal_core::{DiscrepancyId, DomainError, DomainResult, SessionId};

use crate::denomination::{
    is_known_face_value, label_for, DenominationKind, COIN_VALUES, NOTE_VALUES,
};

/// Opening float used when the owner does not declare one.
pub const DEFAULT_OPENING_CASH: i64 = 5000;

/// Session lifecycle. `Reconciled` is reserved; nothing transitions into it
/// yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Open,
    Closed,
    Reconciled,
}

/// Category of a logged cash variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscrepancyKind {
    Shortage,
    Surplus,
    Damage,
    Theft,
    Other,
}

/// An explanatory note for a cash variance. Advisory only: recording one
/// never changes the counted or expected figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    pub id: DiscrepancyId,
    #[serde(rename = "type")]
    pub kind: DiscrepancyKind,
    pub amount: i64,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

/// One day's reconciliation record, from opening-cash declaration to
/// close-out. Amounts are whole rupees.
///
/// This is a value object: the HTTP layer sends it to the client and
/// rebuilds a ledger from it on the next call, so there is no server-side
/// session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSession {
    pub id: SessionId,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub opening_cash: i64,
    /// Face value → count of physical units. Keys are the fixed table only.
    pub denominations: BTreeMap<i64, i64>,
    pub total_counted: i64,
    pub expected_cash: i64,
    pub actual_cash: i64,
    pub difference: i64,
    pub cash_sales: i64,
    pub upi_sales: i64,
    pub total_sales: i64,
    pub notes: String,
    pub discrepancies: Vec<Discrepancy>,
    pub status: SessionStatus,
}

/// Reconciliation verdict classified from the absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationStatus {
    Perfect,
    Acceptable,
    MinorVariance,
    MajorVariance,
    SignificantDiscrepancy,
}

impl ReconciliationStatus {
    /// Classify a signed difference by the fixed rupee thresholds.
    pub fn classify(difference: i64) -> Self {
        match difference.abs() {
            0 => Self::Perfect,
            d if d <= 10 => Self::Acceptable,
            d if d <= 50 => Self::MinorVariance,
            d if d <= 200 => Self::MajorVariance,
            _ => Self::SignificantDiscrepancy,
        }
    }
}

/// Expected-vs-actual verdict included in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub expected_cash: i64,
    pub actual_cash: i64,
    pub difference: i64,
    /// `(difference / expectedCash) × 100`, 2 dp; `0` when expected is zero.
    pub percentage_error: f64,
    pub status: ReconciliationStatus,
}

/// One line of the denomination breakdown. Coins are collapsed into a single
/// aggregate line with no `faceValue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_value: Option<i64>,
    pub label: String,
    pub count: i64,
    pub total: i64,
    pub kind: DenominationKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesShare {
    pub amount: i64,
    /// Share of `totalSales`, 1 dp; `0` when total sales is zero.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesBreakdown {
    pub cash: SalesShare,
    pub upi: SalesShare,
}

/// Full reconciliation report: the session state plus derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    #[serde(flatten)]
    pub session: CashSession,
    /// Minutes between start and end; `0` while the session is open.
    pub duration: i64,
    pub denomination_breakdown: Vec<DenominationLine>,
    pub reconciliation: Reconciliation,
    pub sales_breakdown: SalesBreakdown,
}

/// Owns one session's state and keeps its derived figures consistent.
///
/// `total_counted`, `actual_cash` and `difference` are recomputed after every
/// mutation; they are never stored independently of the denomination map.
#[derive(Debug, Clone, PartialEq)]
pub struct CashSessionLedger {
    session: CashSession,
}

impl CashSessionLedger {
    /// Start a fresh session with the given opening float.
    ///
    /// Negative opening cash is clamped to zero; `None` falls back to
    /// [`DEFAULT_OPENING_CASH`]. All denomination counts start at zero.
    pub fn initialize(opening_cash: Option<i64>) -> Self {
        let opening_cash = opening_cash.unwrap_or(DEFAULT_OPENING_CASH).max(0);
        let now = Utc::now();

        let mut denominations = BTreeMap::new();
        for value in NOTE_VALUES.iter().chain(COIN_VALUES.iter()) {
            denominations.insert(*value, 0);
        }

        Self {
            session: CashSession {
                id: SessionId::new(),
                date: now.date_naive(),
                start_time: now,
                end_time: None,
                opening_cash,
                denominations,
                total_counted: 0,
                expected_cash: opening_cash,
                actual_cash: 0,
                difference: -opening_cash,
                cash_sales: 0,
                upi_sales: 0,
                total_sales: 0,
                notes: String::new(),
                discrepancies: Vec::new(),
                status: SessionStatus::Open,
            },
        }
    }

    /// Rebuild a ledger around a session the caller holds (the HTTP layer
    /// does this on every request). The denomination map is sanitized to the
    /// fixed table (unknown face values dropped, negative counts clamped,
    /// missing entries zeroed) and derived figures are recomputed, so a
    /// tampered or stale payload cannot make them drift.
    pub fn resume(session: CashSession) -> Self {
        let mut ledger = Self { session };
        ledger.sanitize_denominations();
        ledger.recalculate();
        ledger
    }

    /// Restore the closed-table invariant on a client-supplied map.
    fn sanitize_denominations(&mut self) {
        let denominations = &mut self.session.denominations;
        denominations.retain(|value, _| is_known_face_value(*value));
        for count in denominations.values_mut() {
            *count = (*count).max(0);
        }
        for value in NOTE_VALUES.iter().chain(COIN_VALUES.iter()) {
            denominations.entry(*value).or_insert(0);
        }
    }

    pub fn session(&self) -> &CashSession {
        &self.session
    }

    pub fn into_session(self) -> CashSession {
        self.session
    }

    /// Set the counted units for one face value. Negative counts clamp to
    /// zero; a face value outside the fixed table is rejected.
    pub fn set_denomination_count(
        &mut self,
        face_value: i64,
        count: i64,
    ) -> DomainResult<&CashSession> {
        self.ensure_known(face_value)?;
        self.session.denominations.insert(face_value, count.max(0));
        self.recalculate();
        Ok(&self.session)
    }

    /// Add `delta` (may be negative) to the counted units for one face
    /// value, clamping the result at zero.
    pub fn increment_denomination_count(
        &mut self,
        face_value: i64,
        delta: i64,
    ) -> DomainResult<&CashSession> {
        self.ensure_known(face_value)?;
        let current = self.session.denominations.get(&face_value).copied().unwrap_or(0);
        self.session
            .denominations
            .insert(face_value, (current + delta).max(0));
        self.recalculate();
        Ok(&self.session)
    }

    /// Overwrite the day's sales totals. Each call replaces the previous
    /// figures; `None` keeps the session's current value. UPI sales do not
    /// move the physical cash expectation.
    pub fn record_sales(&mut self, cash_sales: Option<i64>, upi_sales: Option<i64>) -> &CashSession {
        let cash = cash_sales.unwrap_or(self.session.cash_sales).max(0);
        let upi = upi_sales.unwrap_or(self.session.upi_sales).max(0);

        self.session.cash_sales = cash;
        self.session.upi_sales = upi;
        self.session.total_sales = cash + upi;
        self.session.expected_cash = self.session.opening_cash + cash;

        self.recalculate();
        &self.session
    }

    /// Append an advisory discrepancy record. No other session field moves.
    pub fn record_discrepancy(
        &mut self,
        kind: DiscrepancyKind,
        amount: i64,
        reason: impl Into<String>,
    ) -> Discrepancy {
        let record = Discrepancy {
            id: DiscrepancyId::new(),
            kind,
            amount,
            reason: reason.into(),
            timestamp: Utc::now(),
        };
        self.session.discrepancies.push(record.clone());
        record
    }

    /// Close out the day: stamp the end time and notes, mark the session
    /// closed, and produce the final summary. Closing an already-closed
    /// session re-stamps and recomputes (idempotent in effect).
    pub fn close(&mut self, notes: impl Into<String>) -> SessionSummary {
        self.session.end_time = Some(Utc::now());
        self.session.notes = notes.into();
        self.session.status = SessionStatus::Closed;
        self.recalculate();
        self.summary()
    }

    /// Read-only reconciliation report; valid for open and closed sessions.
    pub fn summary(&self) -> SessionSummary {
        let s = &self.session;

        let duration = match s.end_time {
            Some(end) => (((end - s.start_time).num_seconds()) as f64 / 60.0).round() as i64,
            None => 0,
        };

        let reconciliation = Reconciliation {
            expected_cash: s.expected_cash,
            actual_cash: s.actual_cash,
            difference: s.difference,
            percentage_error: if s.expected_cash > 0 {
                round2(s.difference as f64 / s.expected_cash as f64 * 100.0)
            } else {
                0.0
            },
            status: ReconciliationStatus::classify(s.difference),
        };

        let share = |amount: i64| SalesShare {
            amount,
            percentage: if s.total_sales > 0 {
                round1(amount as f64 / s.total_sales as f64 * 100.0)
            } else {
                0.0
            },
        };

        SessionSummary {
            session: s.clone(),
            duration,
            denomination_breakdown: self.denomination_breakdown(),
            reconciliation,
            sales_breakdown: SalesBreakdown {
                cash: share(s.cash_sales),
                upi: share(s.upi_sales),
            },
        }
    }

    /// Per-note lines plus one aggregate "Coins" line; zero-total lines are
    /// dropped.
    fn denomination_breakdown(&self) -> Vec<DenominationLine> {
        let count_of = |value: i64| self.session.denominations.get(&value).copied().unwrap_or(0);

        let mut breakdown: Vec<DenominationLine> = NOTE_VALUES
            .iter()
            .map(|&value| {
                let count = count_of(value);
                DenominationLine {
                    face_value: Some(value),
                    label: label_for(value).unwrap_or_default().to_string(),
                    count,
                    total: value * count,
                    kind: DenominationKind::Note,
                }
            })
            .collect();

        let coin_total: i64 = COIN_VALUES.iter().map(|&value| value * count_of(value)).sum();
        breakdown.push(DenominationLine {
            face_value: None,
            label: "Coins".to_string(),
            count: if coin_total > 0 { 1 } else { 0 },
            total: coin_total,
            kind: DenominationKind::Coins,
        });

        breakdown.retain(|line| line.total > 0);
        breakdown
    }

    fn ensure_known(&self, face_value: i64) -> DomainResult<()> {
        if is_known_face_value(face_value) {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "unknown denomination face value: {face_value}"
            )))
        }
    }

    /// Recompute every derived figure from the denomination map and sales.
    fn recalculate(&mut self) {
        let s = &mut self.session;
        s.total_sales = s.cash_sales + s.upi_sales;
        s.expected_cash = s.opening_cash + s.cash_sales;
        s.total_counted = s
            .denominations
            .iter()
            .map(|(value, count)| value * count)
            .sum();
        s.actual_cash = s.total_counted;
        s.difference = s.actual_cash - s.expected_cash;
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
