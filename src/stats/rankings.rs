use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::match_player::ScoredParticipation;
use crate::models::player::{Player, PlayerId};
use crate::models::stats::{PlayerRecord, PlayerSummary, RankingDirection, RankingEntry, RankingSort};

/// Pair each player with the record of their own participations
pub fn summarize(players: Vec<Player>, participations: &[ScoredParticipation]) -> Vec<PlayerSummary> {
    let mut by_player: HashMap<PlayerId, Vec<&ScoredParticipation>> = HashMap::new();
    for row in participations {
        by_player.entry(row.player_id).or_default().push(row);
    }

    players
        .into_iter()
        .map(|player| {
            let record = by_player
                .get(&player.id)
                .map(|rows| PlayerRecord::from_participations(rows.iter().copied()))
                .unwrap_or_default();
            PlayerSummary { player, record }
        })
        .collect()
}

fn sort_key(summary: &PlayerSummary, sort: RankingSort) -> f64 {
    match sort {
        RankingSort::WinRate => summary.record.win_loss_ratio,
        RankingSort::GoalRatio => summary.record.goal_ratio,
        RankingSort::PlayerOfTheMatch => summary.player.player_of_the_match as f64,
        RankingSort::Gamelles => summary.player.gamelles_scored as f64,
        RankingSort::OwnGoals => summary.player.own_goals_scored as f64,
    }
}

/// Orders by the sort key in the given direction. Ties are broken by name.
pub fn rank(mut summaries: Vec<PlayerSummary>, sort: RankingSort, direction: RankingDirection) -> Vec<RankingEntry> {
    summaries.sort_by(|a, b| {
        let by_key = sort_key(a, sort)
            .partial_cmp(&sort_key(b, sort))
            .unwrap_or(Ordering::Equal);
        let by_key = match direction {
            RankingDirection::Asc => by_key,
            RankingDirection::Desc => by_key.reverse(),
        };
        by_key
            .then_with(|| a.player.name.cmp(&b.player.name))
            .then_with(|| a.player.id.cmp(&b.player.id))
    });

    summaries
        .into_iter()
        .enumerate()
        .map(|(index, summary)| RankingEntry { rank: index + 1, summary })
        .collect()
}
