//! Selected squads and optimization results.
//!
//! A [`SquadMember`] pairs a player with the role the optimizer gave it.
//! [`SelectionRules`] re-checks a decoded selection against every squad rule
//! so a solver answer is never trusted blindly, and [`OptimizationResult`] is
//! the immutable record handed back to callers.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;
use super::formation::{Formation, BASE_COMPOSITION, MAX_PLAYERS_PER_CLUB, SQUAD_SIZE};
use super::player::{Player, PlayerTable};
use super::{Club, PlayerId};

/// Role of a selected player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Plays in the chosen formation.
    Starter,
    /// Substitute who may come on.
    Bench,
    /// Cheap non-playing squad slot.
    Filler,
    /// Kept from the current squad without re-optimization.
    Retained,
}

/// A selected player with its role and armband flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadMember {
    pub player: Player,
    pub role: Role,
    pub captain: bool,
    pub vice_captain: bool,
}

impl SquadMember {
    #[must_use]
    pub fn new(player: Player, role: Role) -> Self {
        Self {
            player,
            role,
            captain: false,
            vice_captain: false,
        }
    }

    #[must_use]
    pub fn is_starter(&self) -> bool {
        self.role == Role::Starter
    }
}

/// Give the armband to the two highest-projected starters.
///
/// Ties keep member order, so the earlier row wins.
pub fn assign_captaincy(members: &mut [SquadMember]) {
    for member in members.iter_mut() {
        member.captain = false;
        member.vice_captain = false;
    }

    let mut starters: Vec<usize> = members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_starter())
        .map(|(i, _)| i)
        .collect();
    starters.sort_by(|&a, &b| {
        members[b]
            .player
            .expected_points
            .cmp(&members[a].player.expected_points)
    });

    if let Some(&first) = starters.first() {
        members[first].captain = true;
    }
    if let Some(&second) = starters.get(1) {
        members[second].vice_captain = true;
    }
}

/// Squad rules a selection must satisfy for one formation.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRules {
    pub formation: Formation,
    pub filler_count: u32,
    /// Maximum total value: prior squad value plus funds in bank.
    pub budget: Decimal,
}

impl SelectionRules {
    /// Check `members` against formation, composition, club, filler and
    /// budget rules.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSelection`] describing the first broken
    /// rule.
    pub fn verify(&self, members: &[SquadMember]) -> Result<(), DomainError> {
        let mut starters = [0u32; 4];
        let mut selected = [0u32; 4];
        let mut per_club: HashMap<Club, u32> = HashMap::new();
        let mut fillers = 0u32;
        let mut value = Decimal::ZERO;

        for member in members {
            let index = member.player.position.index();
            selected[index] += 1;
            match member.role {
                Role::Starter => starters[index] += 1,
                Role::Filler => fillers += 1,
                Role::Bench => {}
                Role::Retained => {
                    return Err(DomainError::InvalidSelection(format!(
                        "player {} has no assigned role",
                        member.player.id
                    )))
                }
            }
            *per_club.entry(member.player.club).or_default() += 1;
            value += member.player.price;
        }

        if starters != self.formation.counts() {
            return Err(DomainError::InvalidSelection(format!(
                "starters {starters:?} do not match formation {}",
                self.formation
            )));
        }
        if selected != BASE_COMPOSITION.counts() {
            return Err(DomainError::InvalidSelection(format!(
                "squad {selected:?} does not match base composition"
            )));
        }
        if let Some((club, count)) = per_club
            .iter()
            .find(|(_, &count)| count > MAX_PLAYERS_PER_CLUB)
        {
            return Err(DomainError::InvalidSelection(format!(
                "{count} players selected from {club}"
            )));
        }
        if fillers != self.filler_count {
            return Err(DomainError::InvalidSelection(format!(
                "{fillers} fillers selected, expected {}",
                self.filler_count
            )));
        }
        if value > self.budget {
            return Err(DomainError::InvalidSelection(format!(
                "squad value {value} exceeds budget {}",
                self.budget
            )));
        }
        Ok(())
    }
}

/// Best squad found by one optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Starting formation; `None` when the current squad was kept as-is.
    pub formation: Option<Formation>,
    /// Net expected points: objective points minus transfer cost.
    pub expected_points: Decimal,
    /// Expected points of the starters alone.
    pub starter_points: Decimal,
    pub squad: Vec<SquadMember>,
    pub transfers: u32,
    pub transfer_cost: Decimal,
    pub transfers_in: Vec<PlayerId>,
    pub transfers_out: Vec<PlayerId>,
    /// Total value of the new squad.
    pub value: Decimal,
    /// Sale value of the squad before the run.
    pub prior_value: Decimal,
    /// Change to funds in bank: `prior_value - value`.
    pub bank_change: Decimal,
}

impl OptimizationResult {
    /// The "keep current squad" result: no transfers, no cost, no formation.
    #[must_use]
    pub fn retain(table: &PlayerTable) -> Self {
        let squad: Vec<SquadMember> = table
            .current_squad()
            .map(|p| SquadMember::new(p.clone(), Role::Retained))
            .collect();
        let value = table.squad_value();

        Self {
            formation: None,
            expected_points: Decimal::ZERO,
            starter_points: Decimal::ZERO,
            squad,
            transfers: 0,
            transfer_cost: Decimal::ZERO,
            transfers_in: Vec::new(),
            transfers_out: Vec::new(),
            value,
            prior_value: value,
            bank_change: Decimal::ZERO,
        }
    }

    /// True for the "keep current squad" result.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.formation.is_none()
    }

    /// Whether this result should replace `best`.
    ///
    /// Strictly more net points wins; equal points win only with a strictly
    /// cheaper squad. Points are compared exactly.
    #[must_use]
    pub fn improves_on(&self, best: &Self) -> bool {
        self.expected_points > best.expected_points
            || (self.expected_points == best.expected_points && self.value < best.value)
    }

    /// Members holding `role`.
    pub fn members(&self, role: Role) -> impl Iterator<Item = &SquadMember> {
        self.squad.iter().filter(move |m| m.role == role)
    }

    #[must_use]
    pub fn captain(&self) -> Option<&SquadMember> {
        self.squad.iter().find(|m| m.captain)
    }

    #[must_use]
    pub fn vice_captain(&self) -> Option<&SquadMember> {
        self.squad.iter().find(|m| m.vice_captain)
    }

    /// Members sorted by position, starters first within a position.
    #[must_use]
    pub fn sorted_squad(&self) -> Vec<&SquadMember> {
        let mut members: Vec<&SquadMember> = self.squad.iter().collect();
        members.sort_by_key(|m| (m.player.position, role_rank(m.role)));
        members
    }

    /// Selected players per position.
    #[must_use]
    pub fn position_counts(&self) -> [u32; 4] {
        let mut counts = [0u32; 4];
        for member in &self.squad {
            counts[member.player.position.index()] += 1;
        }
        counts
    }
}

fn role_rank(role: Role) -> u8 {
    match role {
        Role::Starter => 0,
        Role::Bench => 1,
        Role::Retained => 1,
        Role::Filler => 2,
    }
}

/// Number of owned players kept in `members`, and the resulting transfers.
#[must_use]
pub fn count_transfers(members: &[SquadMember]) -> u32 {
    let retained = members.iter().filter(|m| m.player.in_squad).count() as u32;
    SQUAD_SIZE.saturating_sub(retained)
}

/// Split a selection into players bought and owned players sold.
#[must_use]
pub fn transfer_plan(table: &PlayerTable, members: &[SquadMember]) -> (Vec<PlayerId>, Vec<PlayerId>) {
    let bought = members
        .iter()
        .filter(|m| !m.player.in_squad)
        .map(|m| m.player.id)
        .collect();
    let sold = table
        .current_squad()
        .filter(|p| !members.iter().any(|m| m.player.id == p.id))
        .map(|p| p.id)
        .collect();
    (bought, sold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::formation::LEGAL_FORMATIONS;
    use crate::domain::Position;
    use crate::testkit::domain::{player, squad_of_fifteen};
    use rust_decimal_macros::dec;

    fn members_for(formation: Formation, fillers: usize) -> Vec<SquadMember> {
        let mut taken = [0u32; 4];
        let mut members: Vec<SquadMember> = squad_of_fifteen()
            .into_iter()
            .map(|p| {
                let index = p.position.index();
                let role = if taken[index] < formation.count(p.position) {
                    Role::Starter
                } else {
                    Role::Bench
                };
                taken[index] += 1;
                SquadMember::new(p, role)
            })
            .collect();
        for member in members.iter_mut().filter(|m| m.role == Role::Bench).take(fillers) {
            member.role = Role::Filler;
        }
        members
    }

    fn rules(formation: Formation, filler_count: u32) -> SelectionRules {
        SelectionRules {
            formation,
            filler_count,
            budget: dec!(1000),
        }
    }

    #[test]
    fn valid_selection_passes_for_every_formation() {
        for formation in LEGAL_FORMATIONS {
            let members = members_for(formation, 2);
            assert_eq!(rules(formation, 2).verify(&members), Ok(()));
        }
    }

    #[test]
    fn wrong_starter_shape_is_rejected() {
        let members = members_for(LEGAL_FORMATIONS[0], 0);
        let result = rules(LEGAL_FORMATIONS[3], 0).verify(&members);
        assert!(matches!(result, Err(DomainError::InvalidSelection(_))));
    }

    #[test]
    fn filler_count_must_match() {
        let formation = LEGAL_FORMATIONS[3];
        let members = members_for(formation, 1);
        assert!(rules(formation, 2).verify(&members).is_err());
    }

    #[test]
    fn budget_is_enforced() {
        let formation = LEGAL_FORMATIONS[3];
        let members = members_for(formation, 0);
        let value: Decimal = members.iter().map(|m| m.player.price).sum();
        let tight = SelectionRules {
            budget: value - dec!(0.1),
            ..rules(formation, 0)
        };
        assert!(tight.verify(&members).is_err());
    }

    #[test]
    fn club_cap_is_enforced() {
        let formation = LEGAL_FORMATIONS[3];
        let mut members = members_for(formation, 0);
        for member in members.iter_mut().take(4) {
            member.player.club = Club::Mci;
        }
        let err = rules(formation, 0).verify(&members).unwrap_err();
        assert!(err.to_string().contains("MCI"));
    }

    #[test]
    fn captaincy_goes_to_top_two_starters_with_row_order_ties() {
        let mut members = vec![
            SquadMember::new(player(1, Position::Defender, Club::Ars, dec!(45), dec!(5)), Role::Starter),
            SquadMember::new(player(2, Position::Forward, Club::Che, dec!(80), dec!(9)), Role::Starter),
            SquadMember::new(player(3, Position::Midfielder, Club::Liv, dec!(90), dec!(12)), Role::Bench),
            SquadMember::new(player(4, Position::Midfielder, Club::Tot, dec!(70), dec!(9)), Role::Starter),
        ];

        assign_captaincy(&mut members);

        assert!(members[1].captain);
        assert!(members[3].vice_captain);
        assert!(!members[2].captain && !members[2].vice_captain);
        assert_eq!(members.iter().filter(|m| m.captain).count(), 1);
        assert_eq!(members.iter().filter(|m| m.vice_captain).count(), 1);
    }

    #[test]
    fn comparator_prefers_points_then_cheaper_value() {
        let table = PlayerTable::try_new(squad_of_fifteen()).unwrap();
        let base = OptimizationResult::retain(&table);

        let better = OptimizationResult {
            expected_points: dec!(10),
            ..base.clone()
        };
        assert!(better.improves_on(&base));
        assert!(!base.improves_on(&better));

        let cheaper = OptimizationResult {
            value: better.value - dec!(1),
            ..better.clone()
        };
        assert!(cheaper.improves_on(&better));
        assert!(!better.improves_on(&cheaper));
        assert!(!better.improves_on(&better));
    }

    #[test]
    fn fallback_retains_owned_players_without_transfers() {
        let table = PlayerTable::try_new(squad_of_fifteen()).unwrap();
        let fallback = OptimizationResult::retain(&table);

        assert!(fallback.is_fallback());
        assert_eq!(fallback.squad.len(), 15);
        assert_eq!(fallback.transfers, 0);
        assert_eq!(fallback.transfer_cost, Decimal::ZERO);
        assert_eq!(fallback.value, table.squad_value());
        assert_eq!(count_transfers(&fallback.squad), 0);
    }

    #[test]
    fn transfer_plan_lists_bought_and_sold() {
        let squad = squad_of_fifteen();
        let newcomer = player(99, Position::Forward, Club::Wol, dec!(55), dec!(3));
        let mut members: Vec<SquadMember> = squad
            .iter()
            .skip(1)
            .cloned()
            .map(|p| SquadMember::new(p, Role::Bench))
            .collect();
        members.push(SquadMember::new(newcomer, Role::Bench));
        let table = PlayerTable::try_new(squad.clone()).unwrap();

        let (bought, sold) = transfer_plan(&table, &members);

        assert_eq!(bought, vec![PlayerId::new(99)]);
        assert_eq!(sold, vec![squad[0].id]);
        assert_eq!(count_transfers(&members), 1);
    }
}
