//! Fighters, opponent templates, and encounter contexts

use serde::{Deserialize, Serialize};

use crate::duel::ai::AiStyle;
use crate::duel::constants::{BASE_STAMINA, PLAYER_BASE_HP, PLAYER_BASE_STRENGTH, STAMINA_REGEN};
use crate::duel::moves::MoveKind;

/// Hit points, stamina, and muscle for one side of a duel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub hp: u32,
    pub max_hp: u32,
    pub stamina: u32,
    pub max_stamina: u32,
    pub strength: u32,
}

impl Fighter {
    pub fn new(hp: u32, strength: u32) -> Self {
        Self {
            hp,
            max_hp: hp,
            stamina: BASE_STAMINA,
            max_stamina: BASE_STAMINA,
            strength,
        }
    }

    /// Player baseline before context adjustments
    pub fn player_baseline() -> Self {
        Self::new(PLAYER_BASE_HP, PLAYER_BASE_STRENGTH)
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.hp = self.hp.saturating_sub(damage);
    }

    pub fn is_down(&self) -> bool {
        self.hp == 0
    }

    /// Equal stamina still buys the move
    pub fn can_afford(&self, mv: MoveKind) -> bool {
        self.stamina >= mv.stamina_cost()
    }

    /// Pay a move's cost (floors at zero), then catch breath
    pub fn spend_and_recover(&mut self, cost: u32) {
        self.stamina = self.stamina.saturating_sub(cost);
        self.stamina = (self.stamina + STAMINA_REGEN).min(self.max_stamina);
    }
}

/// Immutable stat block for a duel opponent
///
/// Cloned into a fresh `Fighter` when the duel starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentTemplate {
    pub name: String,
    pub hp: u32,
    pub strength: u32,
    pub agility: u32,
    pub style: AiStyle,
}

impl OpponentTemplate {
    /// Deckhand met blade-first during a boarding action
    pub fn pirate_crew() -> Self {
        Self {
            name: "Pirate Crewman".to_string(),
            hp: 80,
            strength: 9,
            agility: 6,
            style: AiStyle::Aggressive,
        }
    }

    /// Big, slow, and several bottles in
    pub fn tavern_brawler() -> Self {
        Self {
            name: "Tavern Brawler".to_string(),
            hp: 70,
            strength: 11,
            agility: 4,
            style: AiStyle::Drunk,
        }
    }

    /// Drilled soldier caught patrolling the walls
    pub fn fort_guard() -> Self {
        Self {
            name: "Fort Guard".to_string(),
            hp: 90,
            strength: 10,
            agility: 7,
            style: AiStyle::Defensive,
        }
    }

    /// An even match with an old score to settle
    pub fn island_rival() -> Self {
        Self {
            name: "Island Rival".to_string(),
            hp: 100,
            strength: 10,
            agility: 8,
            style: AiStyle::Balanced,
        }
    }

    pub fn to_fighter(&self) -> Fighter {
        Fighter::new(self.hp, self.strength)
    }
}

/// Where the fight broke out; decides the stock opponent and where the
/// player comes to afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelContext {
    Boarding,
    Barfight,
    Duel,
    StealthFight,
}

impl DuelContext {
    pub fn stock_opponent(&self) -> OpponentTemplate {
        match self {
            DuelContext::Boarding => OpponentTemplate::pirate_crew(),
            DuelContext::Barfight => OpponentTemplate::tavern_brawler(),
            DuelContext::StealthFight => OpponentTemplate::fort_guard(),
            DuelContext::Duel => OpponentTemplate::island_rival(),
        }
    }

    /// Which screen the caller returns to when the dust settles
    pub fn return_mode(&self) -> ReturnMode {
        match self {
            DuelContext::Boarding => ReturnMode::Overworld,
            DuelContext::Barfight => ReturnMode::Port,
            DuelContext::Duel => ReturnMode::Island,
            DuelContext::StealthFight => ReturnMode::Stealth,
        }
    }
}

/// Post-fight destination hint for the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnMode {
    Overworld,
    Port,
    Island,
    Stealth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fighter_damage_floors_at_zero() {
        let mut fighter = Fighter::new(30, 10);
        fighter.take_damage(50);
        assert_eq!(fighter.hp, 0);
        assert!(fighter.is_down());
    }

    #[test]
    fn test_afford_boundary_is_inclusive() {
        let mut fighter = Fighter::player_baseline();
        fighter.stamina = MoveKind::Thrust.stamina_cost();
        assert!(fighter.can_afford(MoveKind::Thrust));
        fighter.stamina -= 1;
        assert!(!fighter.can_afford(MoveKind::Thrust));
    }

    #[test]
    fn test_spend_and_recover_nets_out() {
        let mut fighter = Fighter::player_baseline();
        fighter.spend_and_recover(MoveKind::Thrust.stamina_cost());
        assert_eq!(fighter.stamina, 80);
    }

    #[test]
    fn test_recover_caps_at_max() {
        let mut fighter = Fighter::player_baseline();
        fighter.spend_and_recover(MoveKind::Dodge.stamina_cost());
        assert_eq!(fighter.stamina, 100);
    }

    #[test]
    fn test_spend_floors_before_recovering() {
        let mut fighter = Fighter::player_baseline();
        fighter.stamina = 5;
        // Cost exceeds the pool: floor at 0, then regain the flat 15
        fighter.spend_and_recover(MoveKind::Dodge.stamina_cost());
        assert_eq!(fighter.stamina, 15);
    }

    #[test]
    fn test_context_opponents() {
        assert_eq!(DuelContext::Boarding.stock_opponent().name, "Pirate Crewman");
        assert_eq!(DuelContext::Barfight.stock_opponent().name, "Tavern Brawler");
        assert_eq!(DuelContext::StealthFight.stock_opponent().name, "Fort Guard");
        assert_eq!(DuelContext::Duel.stock_opponent().name, "Island Rival");
    }

    #[test]
    fn test_context_return_modes() {
        assert_eq!(DuelContext::Boarding.return_mode(), ReturnMode::Overworld);
        assert_eq!(DuelContext::Barfight.return_mode(), ReturnMode::Port);
        assert_eq!(DuelContext::Duel.return_mode(), ReturnMode::Island);
        assert_eq!(DuelContext::StealthFight.return_mode(), ReturnMode::Stealth);
    }

    #[test]
    fn test_template_to_fighter_fills_pools() {
        let fighter = OpponentTemplate::fort_guard().to_fighter();
        assert_eq!(fighter.hp, 90);
        assert_eq!(fighter.max_hp, 90);
        assert_eq!(fighter.stamina, 100);
        assert_eq!(fighter.strength, 10);
    }
}
