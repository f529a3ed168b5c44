use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use wildcard::application::optimizer::OptimizeParams;
use wildcard::domain::formation::{MAX_PLAYERS_PER_CLUB, SQUAD_SIZE};
use wildcard::domain::{OptimizationResult, PlayerTable, Role, BASE_COMPOSITION};

/// Check every squad rule on a solved (non-fallback) result.
pub fn assert_valid_squad(result: &OptimizationResult, table: &PlayerTable, params: &OptimizeParams) {
    let formation = result.formation.expect("expected a solved formation");

    assert_eq!(result.squad.len(), SQUAD_SIZE as usize, "squad size");
    assert_eq!(result.position_counts(), BASE_COMPOSITION.counts(), "composition");

    let ids: HashSet<_> = result.squad.iter().map(|m| m.player.id).collect();
    assert_eq!(ids.len(), result.squad.len(), "a player holds two roles");

    let mut starters = [0u32; 4];
    for member in result.members(Role::Starter) {
        starters[member.player.position.index()] += 1;
    }
    assert_eq!(starters, formation.counts(), "starters match {formation}");

    assert_eq!(
        result.members(Role::Filler).count(),
        params.filler_count as usize,
        "filler count"
    );

    let mut per_club: HashMap<_, u32> = HashMap::new();
    for member in &result.squad {
        *per_club.entry(member.player.club).or_default() += 1;
    }
    assert!(
        per_club.values().all(|&n| n <= MAX_PLAYERS_PER_CLUB),
        "club cap broken: {per_club:?}"
    );

    assert!(
        result.value <= table.squad_value() + params.funds_in_bank,
        "value {} over budget",
        result.value
    );
    assert!(
        result.squad.iter().all(|m| m.player.is_available),
        "unavailable player selected"
    );
}

/// Net points equal starter and bench points minus the transfer cost.
pub fn assert_consistent_points(result: &OptimizationResult) {
    let bench: Decimal = result
        .members(Role::Bench)
        .map(|m| m.player.expected_points)
        .sum();
    let starters: Decimal = result
        .members(Role::Starter)
        .map(|m| m.player.expected_points)
        .sum();

    assert_eq!(result.starter_points, starters);
    assert_eq!(
        result.expected_points,
        starters + bench - result.transfer_cost
    );
}
