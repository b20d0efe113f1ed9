//! JSON battle scenarios: who fights whom, plus optional extra content.
//!
//! This is the strict, caller-side validation layer. The engine itself
//! accepts anything and degrades; a scenario refuses to build instead.

use crate::encounter::{create_creature, learnset_moves, with_moves};
use crate::experience::LEVEL_CAP;
use crate::model::{BattleState, Combatant, Move, ParticipantSide, Species};
use crate::registry::GameData;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} side has no creatures")]
    EmptySide(&'static str),
    #[error("unknown species `{0}`")]
    UnknownSpecies(String),
    #[error("unknown move `{move_id}` for {species}")]
    UnknownMove { species: String, move_id: String },
    #[error("level {level} for {species} is outside 1..=100")]
    InvalidLevel { species: String, level: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureSpec {
    pub species: String,
    pub level: u32,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Defaults to the species learnset at this level.
    #[serde(default)]
    pub moves: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideSpec {
    #[serde(default)]
    pub trainer_name: Option<String>,
    pub creatures: Vec<CreatureSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub id: Option<String>,
    pub player: SideSpec,
    pub enemy: SideSpec,
    /// Registered on top of the base moves, replacing same-id entries.
    #[serde(default)]
    pub moves: Vec<Move>,
    #[serde(default)]
    pub species: Vec<Species>,
}

impl Scenario {
    pub fn from_json(raw: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Merges the scenario's content into `base` and builds the opening state.
    pub fn build(&self, base: &GameData) -> Result<(GameData, BattleState), ScenarioError> {
        let mut data = base.clone();
        data.moves.register(self.moves.iter().cloned());
        data.species.register(self.species.iter().cloned());

        let player = build_side("player", &self.player, &data)?;
        let enemy = build_side("enemy", &self.enemy, &data)?;
        let id = self.id.clone().unwrap_or_else(|| "scenario".to_string());
        tracing::info!(
            battle = %id,
            player = player.creatures.len(),
            enemy = enemy.creatures.len(),
            "scenario built"
        );
        Ok((data, BattleState::new(id, player, enemy)))
    }
}

fn build_side(
    label: &'static str,
    spec: &SideSpec,
    data: &GameData,
) -> Result<ParticipantSide, ScenarioError> {
    if spec.creatures.is_empty() {
        return Err(ScenarioError::EmptySide(label));
    }
    let creatures = spec
        .creatures
        .iter()
        .enumerate()
        .map(|(idx, creature)| build_creature(&format!("{label}-{idx}"), creature, data))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParticipantSide::new(spec.trainer_name.clone(), creatures))
}

fn build_creature(
    uid: &str,
    spec: &CreatureSpec,
    data: &GameData,
) -> Result<Combatant, ScenarioError> {
    let species = data
        .species
        .get(&spec.species)
        .ok_or_else(|| ScenarioError::UnknownSpecies(spec.species.clone()))?;
    if !(1..=LEVEL_CAP).contains(&spec.level) {
        return Err(ScenarioError::InvalidLevel {
            species: spec.species.clone(),
            level: spec.level,
        });
    }

    let mut creature = create_creature(uid, species, spec.level);
    if let Some(nickname) = &spec.nickname {
        creature.nickname = Some(nickname.clone());
    }
    match &spec.moves {
        Some(ids) => {
            if let Some(missing) = ids.iter().find(|id| !data.moves.contains(id)) {
                return Err(ScenarioError::UnknownMove {
                    species: spec.species.clone(),
                    move_id: missing.clone(),
                });
            }
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            creature = with_moves(creature, &ids, &data.moves);
        }
        None => creature.moves = learnset_moves(species, spec.level, &data.moves),
    }
    Ok(creature)
}
