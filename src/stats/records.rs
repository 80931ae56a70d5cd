use std::cmp::Ordering;

use crate::models::match_player::ScoredParticipation;
use crate::models::stats::PlayerRecord;

/// Ratio as the ranking page shows it: `num / den`, or `num` when `den` is 0.
/// Rounded to two decimals.
pub fn ratio(numerator: i64, denominator: i64) -> f64 {
    let value = if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        numerator as f64
    };
    round_to(value, 2)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl PlayerRecord {
    /// Record of one player over the given participations (all must be theirs)
    pub fn from_participations<'a, I>(participations: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoredParticipation>,
    {
        let mut record = PlayerRecord::default();

        for row in participations {
            let (own, other) = if row.team.is_white() {
                (row.white_team_score, row.black_team_score)
            } else {
                (row.black_team_score, row.white_team_score)
            };

            record.matches_played += 1;
            record.goals_scored += i64::from(own);
            record.goals_conceded += i64::from(other);
            match own.cmp(&other) {
                Ordering::Greater => record.wins += 1,
                Ordering::Less => record.losses += 1,
                Ordering::Equal => record.draws += 1,
            }
        }

        record.win_percentage = if record.matches_played > 0 {
            round_to(record.wins as f64 * 100.0 / record.matches_played as f64, 1)
        } else {
            0.0
        };
        record.win_loss_ratio = ratio(i64::from(record.wins), i64::from(record.losses));
        record.goal_ratio = ratio(record.goals_scored, record.goals_conceded);
        record
    }
}
