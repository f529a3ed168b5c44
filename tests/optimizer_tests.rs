//! Squad optimizer tests against the real HiGHS backend.

mod support;

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use wildcard::adapter::solver::HiGHSSolver;
use wildcard::application::optimizer::{OptimizeParams, SquadOptimizer};
use wildcard::domain::{Formation, PlayerId, Position, Role, LEGAL_FORMATIONS};
use wildcard::port::SolutionStatus;
use wildcard::testkit::domain::player;
use wildcard::testkit::solver::{Reply, ScriptedSolver};

use support::assertions::{assert_consistent_points, assert_valid_squad};
use support::players::{random_table, spare_clubs, table_with};

fn optimizer() -> SquadOptimizer {
    SquadOptimizer::new(Arc::new(HiGHSSolver::new()))
}

fn params(funds: Decimal, free_transfers: u32, margin: Decimal, fillers: u32) -> OptimizeParams {
    OptimizeParams::try_new(funds, free_transfers, margin, fillers).unwrap()
}

#[test]
fn owned_squad_alone_picks_best_starting_eleven() {
    let table = table_with(vec![]);
    let params = params(Decimal::ZERO, 0, Decimal::ZERO, 4);

    let result = optimizer().optimize(&table, &params).unwrap();

    assert_valid_squad(&result, &table, &params);
    assert_consistent_points(&result);
    assert_eq!(result.formation, Some(Formation::new(1, 3, 4, 3)));
    assert_eq!(result.expected_points, dec!(60));
    assert_eq!(result.transfers, 0);
    assert_eq!(result.members(Role::Bench).count(), 0);
}

#[test]
fn pricier_replacements_without_funds_keep_the_squad() {
    let extra = vec![
        player(100, Position::Forward, spare_clubs()[0], dec!(100), dec!(10)),
        player(101, Position::Midfielder, spare_clubs()[1], dec!(95), dec!(9)),
    ];
    let table = table_with(extra);
    let params = params(Decimal::ZERO, 0, Decimal::ZERO, 0);

    let result = optimizer().optimize(&table, &params).unwrap();

    assert_valid_squad(&result, &table, &params);
    assert_eq!(result.transfers, 0);
    assert_eq!(result.transfer_cost, Decimal::ZERO);
    assert!(result.transfers_in.is_empty());
    assert_eq!(result.value, table.squad_value());
    assert_eq!(result.expected_points, dec!(73.5));
}

#[test]
fn paid_transfer_made_when_gain_beats_penalty() {
    let table = table_with(vec![player(
        100,
        Position::Midfielder,
        spare_clubs()[0],
        dec!(70),
        dec!(9),
    )]);
    let params = params(Decimal::ZERO, 0, Decimal::ZERO, 0);

    let result = optimizer().optimize(&table, &params).unwrap();

    assert_valid_squad(&result, &table, &params);
    assert_consistent_points(&result);
    assert_eq!(result.transfers, 1);
    assert_eq!(result.transfer_cost, dec!(4));
    assert_eq!(result.transfers_in, vec![PlayerId::new(100)]);
    assert_eq!(result.transfers_out, vec![PlayerId::new(12)]);
    assert_eq!(result.expected_points, dec!(74.5));
}

#[test]
fn margin_makes_marginal_transfer_not_worth_it() {
    let table = table_with(vec![player(
        100,
        Position::Midfielder,
        spare_clubs()[0],
        dec!(70),
        dec!(9),
    )]);
    let params = params(Decimal::ZERO, 0, dec!(2), 0);

    let result = optimizer().optimize(&table, &params).unwrap();

    assert_eq!(result.transfers, 0);
    assert_eq!(result.expected_points, dec!(73.5));
}

#[test]
fn free_transfer_carries_no_penalty() {
    let table = table_with(vec![player(
        100,
        Position::Midfielder,
        spare_clubs()[0],
        dec!(70),
        dec!(9),
    )]);
    let params = params(Decimal::ZERO, 1, Decimal::ZERO, 0);

    let result = optimizer().optimize(&table, &params).unwrap();

    assert_eq!(result.transfers, 1);
    assert_eq!(result.transfer_cost, Decimal::ZERO);
    assert_eq!(result.expected_points, dec!(78.5));
    assert_eq!(result.bank_change, Decimal::ZERO);
}

#[test]
fn funds_in_bank_unlock_expensive_upgrade() {
    let table = table_with(vec![player(
        100,
        Position::Forward,
        spare_clubs()[0],
        dec!(100),
        dec!(12),
    )]);

    let broke = optimizer()
        .optimize(&table, &params(Decimal::ZERO, 1, Decimal::ZERO, 0))
        .unwrap();
    let funded = optimizer()
        .optimize(&table, &params(dec!(20), 1, Decimal::ZERO, 0))
        .unwrap();

    assert_eq!(broke.transfers, 0);
    assert_eq!(funded.transfers, 1);
    assert_eq!(funded.transfers_out, vec![PlayerId::new(15)]);
    assert_eq!(funded.expected_points, dec!(80.5));
    assert_eq!(funded.bank_change, dec!(-20));
}

#[test]
fn full_rebuild_with_enough_free_transfers_has_no_penalty() {
    let table = random_table(7, 80);
    let params = params(dec!(50), 15, Decimal::ZERO, 4);

    let result = optimizer().optimize(&table, &params).unwrap();

    assert_valid_squad(&result, &table, &params);
    assert_consistent_points(&result);
    assert_eq!(result.transfer_cost, Decimal::ZERO);
    assert_eq!(result.expected_points, result.starter_points);
}

#[test]
fn random_pools_always_yield_legal_squads() {
    for seed in 0..4 {
        let table = random_table(seed, 60);
        let params = params(dec!(15), 2, dec!(0.5), 2);

        let result = optimizer().optimize(&table, &params).unwrap();

        assert_valid_squad(&result, &table, &params);
        assert_consistent_points(&result);
        assert_eq!(result.transfers_in.len(), result.transfers as usize);
    }
}

#[test]
fn more_resources_never_score_less() {
    let table = random_table(42, 60);

    let tight = optimizer()
        .optimize(&table, &params(Decimal::ZERO, 1, Decimal::ZERO, 4))
        .unwrap();
    let more_funds = optimizer()
        .optimize(&table, &params(dec!(30), 1, Decimal::ZERO, 4))
        .unwrap();
    let more_transfers = optimizer()
        .optimize(&table, &params(dec!(30), 3, Decimal::ZERO, 4))
        .unwrap();

    assert!(more_funds.expected_points >= tight.expected_points);
    assert!(more_transfers.expected_points >= more_funds.expected_points);
}

#[test]
fn captain_and_vice_are_top_starters() {
    let table = random_table(3, 50);
    let result = optimizer()
        .optimize(&table, &params(dec!(10), 2, Decimal::ZERO, 4))
        .unwrap();

    let captain = result.captain().expect("captain");
    let vice = result.vice_captain().expect("vice captain");
    assert_ne!(captain.player.id, vice.player.id);
    assert_eq!(captain.role, Role::Starter);
    assert_eq!(vice.role, Role::Starter);
    for member in result.members(Role::Starter) {
        assert!(captain.player.expected_points >= member.player.expected_points);
        if member.player.id != captain.player.id {
            assert!(vice.player.expected_points >= member.player.expected_points);
        }
    }
}

#[test]
fn unavailable_players_are_never_selected() {
    let mut star = player(100, Position::Forward, spare_clubs()[0], dec!(45), dec!(15));
    star.is_available = false;
    let table = table_with(vec![star]);

    let result = optimizer()
        .optimize(&table, &params(dec!(100), 15, Decimal::ZERO, 0))
        .unwrap();

    assert!(result.squad.iter().all(|m| m.player.id != PlayerId::new(100)));
}

#[test]
fn timed_out_formation_is_skipped() {
    let table = table_with(vec![]);
    let solver = Arc::new(ScriptedSolver::then_delegate(
        vec![Reply::Status(SolutionStatus::TimeLimit)],
        Arc::new(HiGHSSolver::new()),
    ));
    let params = params(Decimal::ZERO, 0, Decimal::ZERO, 0);

    let result = SquadOptimizer::new(solver.clone())
        .optimize(&table, &params)
        .unwrap();

    assert_eq!(solver.calls(), LEGAL_FORMATIONS.len());
    assert_eq!(result.formation, Some(LEGAL_FORMATIONS[1]));
    assert_eq!(result.expected_points, dec!(73.5));
}

#[test]
fn exhausted_time_budget_falls_back_to_current_squad() {
    let table = random_table(11, 1500);
    let solver = HiGHSSolver::new().with_time_limit(Duration::from_nanos(1));
    let params = params(dec!(20), 3, Decimal::ZERO, 2);

    let result = SquadOptimizer::new(Arc::new(solver))
        .optimize(&table, &params)
        .unwrap();

    assert!(result.is_fallback());
    assert_eq!(result.expected_points, Decimal::ZERO);
    assert_eq!(result.value, table.squad_value());
}
