//! Combatant construction: wild encounters, starters and learnsets.

use crate::experience::LEVEL_CAP;
use crate::model::{Combatant, LearnedMove, Species, Stats, StatusCondition};
use crate::registry::{EncounterTables, GameData, MoveRegistry, SpeciesRegistry};
use crate::rng::{weighted_pick, RandomSource};
use uuid::Uuid;

/// Moves a combatant can hold at once.
pub const MAX_MOVES: usize = 4;
/// Upper bound of the per-stat random bonus on wild combatants.
pub const WILD_STAT_BONUS_MAX: i64 = 5;

fn scaled(base: u32, level: u32) -> u64 {
    2 * base as u64 * level as u64 / 100
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Levels are kept within `1..=LEVEL_CAP` by every constructor.
fn clamp_level(level: u32) -> u32 {
    level.clamp(1, LEVEL_CAP)
}

pub fn calc_stat(base: u32, level: u32) -> u32 {
    saturate(scaled(base, level) + 5)
}

pub fn calc_hp(base: u32, level: u32) -> u32 {
    saturate(scaled(base, level) + level as u64 + 10).max(1)
}

/// Picks a species and level from the location's weighted table.
/// `None` for unknown locations, empty tables and unknown species.
pub fn pick_encounter<'a, R: RandomSource + ?Sized>(
    location: &str,
    tables: &EncounterTables,
    species: &'a SpeciesRegistry,
    rng: &mut R,
) -> Option<(&'a Species, u32)> {
    let Some(slots) = tables.get(location).filter(|slots| !slots.is_empty()) else {
        tracing::warn!(location, "no encounter table for location");
        return None;
    };
    let weighted: Vec<_> = slots.iter().map(|slot| (slot, slot.weight)).collect();
    let slot = *weighted_pick(&weighted, rng)?;
    let level = rng.rand_int(slot.min_level as i64, slot.max_level as i64).max(1) as u32;
    let Some(picked) = species.get(&slot.species_id) else {
        tracing::warn!(location, species = %slot.species_id, "encounter slot names unknown species");
        return None;
    };
    Some((picked, level))
}

/// Level-scaled wild stats with a small random bonus on every non-HP stat.
pub fn generate_wild_creature<R: RandomSource + ?Sized>(
    species: &Species,
    level: u32,
    rng: &mut R,
) -> Combatant {
    let level = clamp_level(level);
    let base = &species.base_stats;
    let mut bonus = || rng.rand_int(0, WILD_STAT_BONUS_MAX) as u32;
    let stats = Stats {
        hp: calc_hp(base.hp, level),
        attack: calc_stat(base.attack, level).saturating_add(bonus()),
        defense: calc_stat(base.defense, level).saturating_add(bonus()),
        sp_attack: calc_stat(base.sp_attack, level).saturating_add(bonus()),
        sp_defense: calc_stat(base.sp_defense, level).saturating_add(bonus()),
        speed: calc_stat(base.speed, level).saturating_add(bonus()),
    };
    Combatant {
        uid: format!("{}-{}", species.id, Uuid::new_v4().simple()),
        species_id: species.id.clone(),
        nickname: None,
        level,
        experience: 0,
        current_hp: stats.hp,
        stats,
        types: species.types.clone(),
        moves: Vec::new(),
        status: StatusCondition::None,
        fainted: false,
    }
}

/// Starter/trainer construction: flat growth on top of the base stats.
pub fn create_creature(uid: impl Into<String>, species: &Species, level: u32) -> Combatant {
    let level = clamp_level(level);
    let base = &species.base_stats;
    let stats = Stats {
        hp: base.hp.saturating_add(level),
        attack: base.attack.saturating_add(level / 2),
        defense: base.defense.saturating_add(level / 2),
        sp_attack: base.sp_attack.saturating_add(level / 2),
        sp_defense: base.sp_defense.saturating_add(level / 2),
        speed: base.speed.saturating_add(level / 2),
    };
    Combatant {
        uid: uid.into(),
        species_id: species.id.clone(),
        nickname: Some(species.name.clone()),
        level,
        experience: 0,
        current_hp: stats.hp,
        stats,
        types: species.types.clone(),
        moves: Vec::new(),
        status: StatusCondition::None,
        fainted: false,
    }
}

/// The most recently learned moves at or below `level`, at full PP.
pub fn learnset_moves(species: &Species, level: u32, moves: &MoveRegistry) -> Vec<LearnedMove> {
    let mut learnable: Vec<_> = species
        .learnset
        .iter()
        .filter(|entry| entry.level <= level)
        .collect();
    learnable.sort_by_key(|entry| entry.level);

    let mut known: Vec<LearnedMove> = Vec::new();
    for entry in learnable {
        let Some(move_def) = moves.get(&entry.move_id) else {
            continue;
        };
        known.retain(|m| m.move_id != move_def.id);
        known.push(LearnedMove {
            move_id: move_def.id.clone(),
            current_pp: move_def.pp,
        });
    }
    let skip = known.len().saturating_sub(MAX_MOVES);
    known.split_off(skip)
}

/// Replaces the creature's moves with `move_ids` at full PP; unknown ids are skipped.
pub fn with_moves(mut creature: Combatant, move_ids: &[&str], moves: &MoveRegistry) -> Combatant {
    creature.moves = move_ids
        .iter()
        .filter_map(|id| moves.get(id))
        .map(|m| LearnedMove {
            move_id: m.id.clone(),
            current_pp: m.pp,
        })
        .collect();
    creature
}

/// A fresh wild combatant for `location`, with its learnset moves.
pub fn generate_encounter_for_location<R: RandomSource + ?Sized>(
    location: &str,
    data: &GameData,
    rng: &mut R,
) -> Option<Combatant> {
    let (species, level) = pick_encounter(location, &data.encounters, &data.species, rng)?;
    let mut creature = generate_wild_creature(species, level, rng);
    creature.moves = learnset_moves(species, level, &data.moves);
    tracing::debug!(location, species = %species.id, level, uid = %creature.uid, "wild encounter");
    Some(creature)
}
