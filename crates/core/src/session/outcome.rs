//! Weighted outcome model for synthetic scans.
//!
//! Each tick draws exactly one [`Outcome`] from a fixed discrete
//! distribution using a cumulative-threshold walk: draw `r` uniformly in
//! `[0, 1)`, walk the outcomes in listed order accumulating weight, and pick
//! the first outcome whose cumulative weight reaches `r`. The walk order is
//! part of the contract, since it decides which outcome wins at the exact
//! band boundaries.

use rand::Rng;
use serde::{Deserialize, Serialize};
use slotwatch_domain::constants::{
    APPOINTMENT_HORIZON_DAYS, OUTCOME_WEIGHTS, SCAN_ERROR_MESSAGES,
};

/// Category drawn for one synthetic scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Scan completed, nothing found.
    Success,
    /// Scan failed with a synthetic error.
    Error,
    /// Scan degraded.
    Warning,
    /// An appointment slot turned up.
    Appointment,
}

/// Ordered weight table backing the outcome draw.
#[derive(Debug, Clone)]
pub struct OutcomeTable {
    entries: Vec<(Outcome, f64)>,
}

impl Default for OutcomeTable {
    /// Production weights: success 0.70, error 0.20, warning 0.08,
    /// appointment 0.02, walked in that order.
    fn default() -> Self {
        let [success, error, warning, appointment] = OUTCOME_WEIGHTS;
        Self {
            entries: vec![
                (Outcome::Success, success),
                (Outcome::Error, error),
                (Outcome::Warning, warning),
                (Outcome::Appointment, appointment),
            ],
        }
    }
}

impl OutcomeTable {
    /// Builds a table from explicit entries, walked in the given order.
    #[must_use]
    pub fn new(entries: Vec<(Outcome, f64)>) -> Self {
        Self { entries }
    }

    /// Resolves a uniform sample `r` in `[0, 1)` to an outcome.
    ///
    /// Walks the entries in order, accumulating weight, and returns the
    /// first entry whose cumulative weight is `>= r`. Samples beyond the
    /// total weight (possible only through rounding) land on the last entry.
    #[must_use]
    pub fn pick(&self, r: f64) -> Outcome {
        let mut cumulative = 0.0;
        for &(outcome, weight) in &self.entries {
            cumulative += weight;
            if cumulative >= r {
                return outcome;
            }
        }
        // Rounding slack: the weights sum to 1.0 up to float error.
        self.entries.last().map_or(Outcome::Success, |&(outcome, _)| outcome)
    }

    /// Draws one outcome using `rng` as the randomness source.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        self.pick(rng.gen::<f64>())
    }
}

/// Picks one element uniformly at random, `None` for an empty slice.
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.gen_range(0..items.len()))
    }
}

/// Draws one message from the fixed synthetic error catalog.
pub fn scan_error_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SCAN_ERROR_MESSAGES[rng.gen_range(0..SCAN_ERROR_MESSAGES.len())]
}

/// Draws how many days ahead a synthetic appointment lies (1..=30).
pub fn appointment_offset_days<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(1..=APPOINTMENT_HORIZON_DAYS)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn cumulative_walk_maps_bands_in_listed_order() {
        let table = OutcomeTable::default();

        // Bands: success (0, 0.70], error (0.70, 0.90], warning (0.90, 0.98],
        // appointment (0.98, 1.00).
        assert_eq!(table.pick(0.0), Outcome::Success);
        assert_eq!(table.pick(0.5), Outcome::Success);
        assert_eq!(table.pick(0.70), Outcome::Success);
        assert_eq!(table.pick(0.75), Outcome::Error);
        assert_eq!(table.pick(0.90), Outcome::Error);
        assert_eq!(table.pick(0.95), Outcome::Warning);
        assert_eq!(table.pick(0.99), Outcome::Appointment);
        assert_eq!(table.pick(0.9999), Outcome::Appointment);
    }

    #[test]
    fn oversized_sample_falls_back_to_last_entry() {
        let table = OutcomeTable::default();
        assert_eq!(table.pick(2.0), Outcome::Appointment);
    }

    #[test]
    fn draw_only_produces_table_outcomes() {
        let table = OutcomeTable::default();
        let mut rng = StdRng::seed_from_u64(7);

        let mut saw_success = false;
        for _ in 0..500 {
            match table.draw(&mut rng) {
                Outcome::Success => saw_success = true,
                Outcome::Error | Outcome::Warning | Outcome::Appointment => {}
            }
        }
        // With weight 0.70 over 500 draws, success is a statistical certainty.
        assert!(saw_success);
    }

    #[test]
    fn uniform_pick_covers_all_items_and_handles_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(item) = pick_uniform(&mut rng, &items) {
                seen.insert(*item);
            }
        }
        assert_eq!(seen.len(), items.len());

        let empty: [&str; 0] = [];
        assert!(pick_uniform(&mut rng, &empty).is_none());
    }

    #[test]
    fn appointment_offset_stays_within_horizon() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let days = appointment_offset_days(&mut rng);
            assert!((1..=30).contains(&days));
        }
    }
}
