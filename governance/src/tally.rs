//! Vote tally projections for display.

use omega_types::VoteTally;

/// Percentage view of one proposal's tally.
///
/// Each option's share is `option / total * 100`; a tally with no votes at
/// all reads as 0% everywhere, never NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TallyView {
    pub total_votes: u64,
    pub percent_against: f64,
    pub percent_for: f64,
    pub percent_abstain: f64,
}

impl TallyView {
    pub fn from_tally(tally: &VoteTally) -> Self {
        let total = tally.total();
        Self {
            total_votes: total,
            percent_against: percent(tally.against, total),
            percent_for: percent(tally.in_favor, total),
            percent_abstain: percent(tally.abstain, total),
        }
    }
}

/// Share of members that have voted, as a percentage.
pub fn participation_percent(total_votes: u64, member_count: usize) -> f64 {
    percent(total_votes, member_count as u64)
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_sum_to_hundred() {
        let view = TallyView::from_tally(&VoteTally {
            against: 1,
            in_favor: 3,
            abstain: 4,
        });

        assert_eq!(view.total_votes, 8);
        assert_eq!(view.percent_against, 12.5);
        assert_eq!(view.percent_for, 37.5);
        assert_eq!(view.percent_abstain, 50.0);
        assert_eq!(
            view.percent_against + view.percent_for + view.percent_abstain,
            100.0
        );
    }

    #[test]
    fn empty_tally_is_all_zero() {
        let view = TallyView::from_tally(&VoteTally::default());
        assert_eq!(view.total_votes, 0);
        assert_eq!(view.percent_for, 0.0);
        assert_eq!(view.percent_against, 0.0);
        assert_eq!(view.percent_abstain, 0.0);
    }

    #[test]
    fn participation() {
        assert_eq!(participation_percent(3, 4), 75.0);
        assert_eq!(participation_percent(0, 0), 0.0);
    }
}
