use std::collections::HashMap;

use crate::ledger::StatDelta;
use crate::models::match_player::ScoredParticipation;
use crate::models::player::{Player, PlayerId};
use crate::models::stats::CounterDrift;

/// Expected counters per player, summed from stored participations
pub fn expected_counters(participations: &[ScoredParticipation]) -> HashMap<PlayerId, StatDelta> {
    let mut totals: HashMap<PlayerId, StatDelta> = HashMap::new();
    for row in participations {
        *totals.entry(row.player_id).or_default() += StatDelta::for_scored(row);
    }
    totals
}

/// Players whose stored counters disagree with their participations, in player order
pub fn compute_drift(players: &[Player], participations: &[ScoredParticipation]) -> Vec<CounterDrift> {
    let totals = expected_counters(participations);

    let mut drifted: Vec<CounterDrift> = players
        .iter()
        .filter_map(|player| {
            let stored = StatDelta::of_player(player);
            let expected = totals.get(&player.id).copied().unwrap_or_default();
            (stored != expected).then(|| CounterDrift {
                player_id: player.id,
                name: player.name.clone(),
                stored,
                expected,
            })
        })
        .collect();

    drifted.sort_by_key(|drift| drift.player_id);
    drifted
}
