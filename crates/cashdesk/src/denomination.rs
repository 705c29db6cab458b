//! The fixed table of INR denominations tracked at the counter.

use serde::{Deserialize, Serialize};

/// Whether a face value circulates as a note or a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominationKind {
    Note,
    Coins,
}

/// One tracked face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denomination {
    /// Face value in whole rupees.
    pub value: i64,
    pub label: &'static str,
    pub kind: DenominationKind,
}

/// Note face values, largest first.
pub const NOTE_VALUES: [i64; 7] = [2000, 500, 200, 100, 50, 20, 10];

/// Coin face values, largest first. ₹10 circulates as both a note and a
/// coin; it is tracked in the note bucket so counts partition cleanly.
pub const COIN_VALUES: [i64; 3] = [5, 2, 1];

/// The full tracked table, notes then coins, largest first.
pub const DENOMINATIONS: [Denomination; 10] = [
    Denomination { value: 2000, label: "₹2000", kind: DenominationKind::Note },
    Denomination { value: 500, label: "₹500", kind: DenominationKind::Note },
    Denomination { value: 200, label: "₹200", kind: DenominationKind::Note },
    Denomination { value: 100, label: "₹100", kind: DenominationKind::Note },
    Denomination { value: 50, label: "₹50", kind: DenominationKind::Note },
    Denomination { value: 20, label: "₹20", kind: DenominationKind::Note },
    Denomination { value: 10, label: "₹10", kind: DenominationKind::Note },
    Denomination { value: 5, label: "₹5", kind: DenominationKind::Coins },
    Denomination { value: 2, label: "₹2", kind: DenominationKind::Coins },
    Denomination { value: 1, label: "₹1", kind: DenominationKind::Coins },
];

/// Whether `value` is in the tracked table.
pub fn is_known_face_value(value: i64) -> bool {
    DENOMINATIONS.iter().any(|d| d.value == value)
}

/// Label for a tracked face value.
pub fn label_for(value: i64) -> Option<&'static str> {
    DENOMINATIONS.iter().find(|d| d.value == value).map(|d| d.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_largest_first_within_kind() {
        let notes: Vec<i64> = DENOMINATIONS
            .iter()
            .filter(|d| d.kind == DenominationKind::Note)
            .map(|d| d.value)
            .collect();
        let mut sorted = notes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(notes, sorted);
        assert_eq!(notes, NOTE_VALUES.to_vec());
    }

    #[test]
    fn known_face_values() {
        for v in NOTE_VALUES.iter().chain(COIN_VALUES.iter()) {
            assert!(is_known_face_value(*v));
        }
        assert!(!is_known_face_value(2500));
        assert!(!is_known_face_value(0));
    }
}
