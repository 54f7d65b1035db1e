//! Scan statistics.
//!
//! Counters accumulate alongside each generated outcome; the success rate is
//! always derived on read so it can never drift from the counters.

use serde::{Deserialize, Serialize};

/// Aggregated session counters shown on the dashboard stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total synthetic scans performed.
    pub total_scans: u64,
    /// Local time of the most recent scan, `HH:MM:SS`; `None` before the
    /// first tick.
    pub last_scan: Option<String>,
    /// Appointment outcomes observed.
    pub appointments_found: u64,
    /// Error outcomes observed.
    pub errors: u64,
}

impl ScanStats {
    /// Percentage of scans that did not end in an error, rounded to the
    /// nearest integer.
    ///
    /// The denominator is floored at 1, so a fresh session reports 100
    /// instead of dividing by zero.
    #[must_use]
    pub fn success_rate(&self) -> u8 {
        let total = self.total_scans.max(1) as f64;
        let ok = self.total_scans.saturating_sub(self.errors) as f64;
        ((ok / total) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_is_100_for_fresh_stats() {
        assert_eq!(ScanStats::default().success_rate(), 100);
    }

    #[test]
    fn success_rate_rounds_to_nearest_integer() {
        let stats = ScanStats { total_scans: 3, errors: 1, ..Default::default() };
        // 2/3 = 66.67 -> 67
        assert_eq!(stats.success_rate(), 67);

        let stats = ScanStats { total_scans: 10, errors: 2, ..Default::default() };
        assert_eq!(stats.success_rate(), 80);
    }

    #[test]
    fn all_errors_is_zero_percent() {
        let stats = ScanStats { total_scans: 5, errors: 5, ..Default::default() };
        assert_eq!(stats.success_rate(), 0);
    }

    #[test]
    fn stats_serialize_for_the_dashboard() {
        let stats = ScanStats {
            total_scans: 12,
            last_scan: Some("09:30:00".to_string()),
            appointments_found: 1,
            errors: 2,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("total_scans"));
        assert!(json.contains("09:30:00"));

        let back: ScanStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
