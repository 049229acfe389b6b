use crate::view::contracts::BidRecord;

/// Arithmetic mean of the win percentages across a set of bid records,
/// rounded half away from zero. An empty set yields 0.
///
/// Out-of-range percentages are not clamped, the mean simply reflects them.
pub fn overall_win_rate(records: &[BidRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let sum: f64 = records.iter().map(|record| record.win_percentage).sum();
    (sum / records.len() as f64).round() as i64
}

/// Two-segment split of the overall win rate out of 100, as consumed by the
/// donut summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRateSplit {
    pub win:       i64,
    pub remaining: i64,
}

impl WinRateSplit {
    pub fn from_records(records: &[BidRecord]) -> Self {
        let win = overall_win_rate(records);
        Self { win, remaining: 100 - win }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn record(win_percentage: f64) -> BidRecord {
        BidRecord { name: "Project".to_string(), win_percentage }
    }

    #[parameterized(
        empty = { &[], 0 },
        single = { &[42.0], 42 },
        sample_set = { &[75.0, 60.0, 80.0, 45.0, 90.0], 70 },
        tie_rounds_up = { &[67.0, 68.0], 68 },
        no_clamping = { &[150.0, 50.0], 100 },
        fractional = { &[33.3, 33.3, 33.5], 33 }
    )]
    fn mean_win_rate(percentages: &[f64], expected: i64) {
        let records: Vec<BidRecord> =
            percentages.iter().copied().map(record).collect();
        assert_eq!(overall_win_rate(&records), expected);
    }

    #[test]
    fn split_sums_to_one_hundred() {
        let records: Vec<BidRecord> =
            [75.0, 60.0, 80.0, 45.0, 90.0].map(record).to_vec();
        let split = WinRateSplit::from_records(&records);
        assert_eq!(split.win, 70);
        assert_eq!(split.remaining, 30);
    }

    #[test]
    fn split_of_nothing_is_all_remaining() {
        let split = WinRateSplit::from_records(&[]);
        assert_eq!(split.win, 0);
        assert_eq!(split.remaining, 100);
    }
}
