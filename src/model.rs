use crate::battle_logger::BattleLog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Per-combatant condition. Burn, freeze and confusion are tracked but have no
/// turn-start or turn-end behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCondition {
    #[default]
    None,
    Poison,
    Burn,
    Paralysis,
    Sleep,
    Freeze,
    Confusion,
}

impl StatusCondition {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "none" => Some(StatusCondition::None),
            "poison" => Some(StatusCondition::Poison),
            "burn" => Some(StatusCondition::Burn),
            "paralysis" => Some(StatusCondition::Paralysis),
            "sleep" => Some(StatusCondition::Sleep),
            "freeze" => Some(StatusCondition::Freeze),
            "confusion" => Some(StatusCondition::Confusion),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCondition::None => "none",
            StatusCondition::Poison => "poison",
            StatusCondition::Burn => "burn",
            StatusCondition::Paralysis => "paralysis",
            StatusCondition::Sleep => "sleep",
            StatusCondition::Freeze => "freeze",
            StatusCondition::Confusion => "confusion",
        }
    }

    pub fn is_none(self) -> bool {
        self == StatusCondition::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl Stats {
    /// Sum of the five non-HP stats.
    pub fn battle_total(&self) -> u64 {
        [
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
        .iter()
        .map(|&s| s as u64)
        .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: ElementType,
    pub category: MoveCategory,
    /// `None` for moves that deal no direct damage.
    #[serde(default)]
    pub power: Option<u32>,
    /// Percentage; `None` never misses.
    #[serde(default)]
    pub accuracy: Option<u32>,
    pub pp: u32,
    #[serde(rename = "maxPP")]
    pub max_pp: u32,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_id: Option<String>,
}

impl Move {
    pub fn is_damaging(&self) -> bool {
        self.power.map_or(false, |p| p > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnedMove {
    pub move_id: String,
    #[serde(rename = "currentPP")]
    pub current_pp: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnsetEntry {
    pub level: u32,
    pub move_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: String,
    pub name: String,
    pub types: Vec<ElementType>,
    pub base_stats: Stats,
    #[serde(default)]
    pub catch_rate: Option<u32>,
    #[serde(default)]
    pub learnset: Vec<LearnsetEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub uid: String,
    pub species_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub level: u32,
    pub experience: u64,
    #[serde(rename = "currentHP")]
    pub current_hp: u32,
    pub stats: Stats,
    pub types: Vec<ElementType>,
    #[serde(default)]
    pub moves: Vec<LearnedMove>,
    #[serde(default)]
    pub status: StatusCondition,
    #[serde(default, rename = "isFainted")]
    pub fainted: bool,
}

impl Combatant {
    pub fn is_fainted(&self) -> bool {
        self.fainted || self.current_hp == 0
    }

    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.species_id)
    }

    pub fn learned_move(&self, move_id: &str) -> Option<&LearnedMove> {
        self.moves.iter().find(|m| m.move_id == move_id)
    }

    pub fn learned_move_mut(&mut self, move_id: &str) -> Option<&mut LearnedMove> {
        self.moves.iter_mut().find(|m| m.move_id == move_id)
    }

    /// Subtracts HP (floored at zero) and keeps the fainted flag in sync.
    /// Returns true when this hit knocked the combatant out.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_down = self.is_fainted();
        self.current_hp = self.current_hp.saturating_sub(amount);
        if self.current_hp == 0 {
            self.fainted = true;
        }
        !was_down && self.fainted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
    pub creatures: Vec<Combatant>,
    #[serde(default)]
    pub active_index: usize,
}

impl ParticipantSide {
    pub fn new(trainer_name: Option<String>, creatures: Vec<Combatant>) -> Self {
        ParticipantSide {
            trainer_name,
            creatures,
            active_index: 0,
        }
    }

    fn clamped_index(&self) -> Option<usize> {
        if self.creatures.is_empty() {
            None
        } else {
            Some(self.active_index.min(self.creatures.len() - 1))
        }
    }

    pub fn active(&self) -> Option<&Combatant> {
        self.clamped_index().map(|idx| &self.creatures[idx])
    }

    pub fn active_mut(&mut self) -> Option<&mut Combatant> {
        let idx = self.clamped_index()?;
        self.creatures.get_mut(idx)
    }

    /// True when there is no active combatant able to fight.
    pub fn is_down(&self) -> bool {
        self.active().map_or(true, Combatant::is_fainted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub player: ParticipantSide,
    pub enemy: ParticipantSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    None,
    Rain,
    Sun,
    Sandstorm,
    Hail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BattlePhase {
    #[default]
    Start,
    AwaitingActions,
    ExecutingTurn,
    FaintedSwitch,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveAction {
    pub actor_side: Side,
    pub actor_index: usize,
    pub move_id: String,
    pub target_side: Side,
    pub target_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedAction {
    pub action: MoveAction,
    /// Lower resolves first.
    pub priority: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub id: String,
    pub sides: Sides,
    #[serde(default)]
    pub weather: Weather,
    pub turn: u32,
    #[serde(default)]
    pub phase: BattlePhase,
    #[serde(default)]
    pub queue: Vec<QueuedAction>,
    #[serde(default)]
    pub log: BattleLog,
}

impl BattleState {
    pub fn new(id: impl Into<String>, player: ParticipantSide, enemy: ParticipantSide) -> Self {
        BattleState {
            id: id.into(),
            sides: Sides { player, enemy },
            weather: Weather::None,
            turn: 1,
            phase: BattlePhase::Start,
            queue: Vec::new(),
            log: BattleLog::new(),
        }
    }

    pub fn side(&self, side: Side) -> &ParticipantSide {
        match side {
            Side::Player => &self.sides.player,
            Side::Enemy => &self.sides.enemy,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut ParticipantSide {
        match side {
            Side::Player => &mut self.sides.player,
            Side::Enemy => &mut self.sides.enemy,
        }
    }

    pub fn active(&self, side: Side) -> Option<&Combatant> {
        self.side(side).active()
    }

    pub fn active_mut(&mut self, side: Side) -> Option<&mut Combatant> {
        self.side_mut(side).active_mut()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSlot {
    pub species_id: String,
    pub min_level: u32,
    pub max_level: u32,
    pub weight: f64,
}

/// A ball-like item as seen by the capture formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureDevice {
    pub id: String,
    pub name: String,
    pub catch_modifier: f64,
}
