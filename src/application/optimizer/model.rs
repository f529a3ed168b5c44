//! Integer program for one starting formation.
//!
//! Every candidate gets three binary variables (starter, bench, filler),
//! laid out consecutively. One trailing continuous variable carries the
//! transfer penalty so `max(0, ...)` stays linear:
//!
//! ```text
//! minimize   -Σ points·(s + b) + penalty
//! subject to penalty + unit·Σ owned·(s + b + f) >= unit·(15 - free)
//!            Σ price·(s + b + f) <= prior value + funds
//!            Σ_pos s = formation[pos]
//!            Σ_pos (s + b + f) = base[pos]
//!            Σ_club (s + b + f) <= 3
//!            s + b + f <= 1            (each player)
//!            Σ f = fillers
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::OptimizeParams;
use crate::domain::constraint::{Constraint, VariableBounds};
use crate::domain::formation::{
    Formation, BASE_COMPOSITION, MAX_PLAYERS_PER_CLUB, SQUAD_SIZE,
};
use crate::domain::transfer::transfer_unit_cost;
use crate::domain::{Club, Player, Position, Role, SquadMember};
use crate::port::{IlpProblem, LpProblem};

const VARS_PER_PLAYER: usize = 3;

/// Maps candidates and roles to variable indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VariableLayout {
    candidates: usize,
}

impl VariableLayout {
    pub(crate) const fn new(candidates: usize) -> Self {
        Self { candidates }
    }

    pub(crate) const fn starter(&self, i: usize) -> usize {
        VARS_PER_PLAYER * i
    }

    pub(crate) const fn bench(&self, i: usize) -> usize {
        VARS_PER_PLAYER * i + 1
    }

    pub(crate) const fn filler(&self, i: usize) -> usize {
        VARS_PER_PLAYER * i + 2
    }

    pub(crate) const fn penalty(&self) -> usize {
        VARS_PER_PLAYER * self.candidates
    }

    pub(crate) const fn num_vars(&self) -> usize {
        VARS_PER_PLAYER * self.candidates + 1
    }

    /// All three role variables of candidate `i`.
    fn roles(&self, i: usize) -> [usize; 3] {
        [self.starter(i), self.bench(i), self.filler(i)]
    }
}

/// A built model and the layout needed to decode its solution.
#[derive(Debug, Clone)]
pub(crate) struct SquadModel {
    pub problem: IlpProblem,
    pub layout: VariableLayout,
}

/// True when the pool has enough players per position to fill the squad.
///
/// Formation counts never exceed the base composition, so this is the
/// only pool-size condition; checking it avoids a pointless solve.
pub(crate) fn pool_can_fill_squad(candidates: &[&Player]) -> bool {
    Position::ALL.into_iter().all(|position| {
        let available = candidates.iter().filter(|p| p.position == position).count();
        available >= BASE_COMPOSITION.count(position) as usize
    })
}

/// Build the integer program for `formation`.
pub(crate) fn build(
    candidates: &[&Player],
    formation: Formation,
    params: &OptimizeParams,
    prior_value: Decimal,
) -> SquadModel {
    let layout = VariableLayout::new(candidates.len());
    let mut lp = LpProblem::new(layout.num_vars());

    // Objective: the solver minimizes, so points enter negated.
    for (i, player) in candidates.iter().enumerate() {
        lp.objective[layout.starter(i)] = -player.expected_points;
        lp.objective[layout.bench(i)] = -player.expected_points;
    }
    lp.objective[layout.penalty()] = Decimal::ONE;

    for i in 0..candidates.len() {
        for var in layout.roles(i) {
            lp.bounds[var] = VariableBounds::binary();
        }
    }
    lp.bounds[layout.penalty()] = VariableBounds::non_negative();

    // Transfer penalty
    let unit = transfer_unit_cost(params.transfer_margin);
    let mut penalty_terms = vec![(layout.penalty(), Decimal::ONE)];
    for (i, player) in candidates.iter().enumerate() {
        if player.in_squad {
            penalty_terms.extend(layout.roles(i).map(|var| (var, unit)));
        }
    }
    let charged_slots = Decimal::from(SQUAD_SIZE) - Decimal::from(params.free_transfers);
    lp.constraints
        .push(Constraint::geq(penalty_terms, unit * charged_slots));

    // Budget
    let spend = candidates
        .iter()
        .enumerate()
        .flat_map(|(i, player)| layout.roles(i).map(|var| (var, player.price)))
        .collect();
    lp.constraints.push(Constraint::leq(
        spend,
        prior_value + params.funds_in_bank,
    ));

    // Formation and base composition
    for position in Position::ALL {
        let members: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, p)| p.position == position)
            .map(|(i, _)| i)
            .collect();

        lp.constraints.push(Constraint::eq(
            Constraint::ones(members.iter().map(|&i| layout.starter(i))),
            Decimal::from(formation.count(position)),
        ));
        lp.constraints.push(Constraint::eq(
            Constraint::ones(members.iter().flat_map(|&i| layout.roles(i))),
            Decimal::from(BASE_COMPOSITION.count(position)),
        ));
    }

    // Club cap, only for clubs present in the pool
    let mut by_club: BTreeMap<Club, Vec<usize>> = BTreeMap::new();
    for (i, player) in candidates.iter().enumerate() {
        by_club.entry(player.club).or_default().push(i);
    }
    for members in by_club.values() {
        if members.len() as u32 > MAX_PLAYERS_PER_CLUB {
            lp.constraints.push(Constraint::leq(
                Constraint::ones(members.iter().flat_map(|&i| layout.roles(i))),
                Decimal::from(MAX_PLAYERS_PER_CLUB),
            ));
        }
    }

    // One role per player
    for i in 0..candidates.len() {
        lp.constraints
            .push(Constraint::leq(Constraint::ones(layout.roles(i)), Decimal::ONE));
    }

    // Filler count
    lp.constraints.push(Constraint::eq(
        Constraint::ones((0..candidates.len()).map(|i| layout.filler(i))),
        Decimal::from(params.filler_count),
    ));

    let integer_vars = (0..layout.penalty()).collect();
    SquadModel {
        problem: IlpProblem::new(lp, integer_vars),
        layout,
    }
}

/// Turn a solved assignment back into squad members, in candidate order.
///
/// Returns `None` when a candidate was given more than one role.
pub(crate) fn decode(
    candidates: &[&Player],
    layout: &VariableLayout,
    values: &[Decimal],
) -> Option<Vec<SquadMember>> {
    let half = Decimal::new(5, 1);
    let is_set = |var: usize| values.get(var).is_some_and(|v| *v > half);

    let mut members = Vec::new();
    for (i, player) in candidates.iter().enumerate() {
        let roles: Vec<Role> = [
            (layout.starter(i), Role::Starter),
            (layout.bench(i), Role::Bench),
            (layout.filler(i), Role::Filler),
        ]
        .into_iter()
        .filter(|&(var, _)| is_set(var))
        .map(|(_, role)| role)
        .collect();

        match roles.as_slice() {
            [] => {}
            [role] => members.push(SquadMember::new((*player).clone(), *role)),
            _ => return None,
        }
    }
    Some(members)
}
