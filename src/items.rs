use crate::model::Combatant;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Potion {
        #[serde(rename = "healAmount")]
        heal_amount: u32,
    },
    Revive {
        /// Fraction of max HP restored, e.g. `0.5`.
        #[serde(rename = "revivePercent")]
        revive_percent: f64,
    },
    #[serde(rename = "pokeball")]
    Capture {
        #[serde(rename = "catchModifier")]
        catch_modifier: f64,
    },
    Key,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    Applied(String),
    NoEffect(String),
}

impl ItemOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, ItemOutcome::Applied(_))
    }

    pub fn message(&self) -> &str {
        match self {
            ItemOutcome::Applied(msg) | ItemOutcome::NoEffect(msg) => msg,
        }
    }
}

/// Uses a field item on a party member outside of battle.
pub fn use_item(creature: &mut Combatant, item: &Item) -> ItemOutcome {
    match item.kind {
        ItemKind::Potion { heal_amount } => {
            if creature.is_fainted() {
                return ItemOutcome::NoEffect("It won't have any effect.".to_string());
            }
            let before = creature.current_hp;
            creature.current_hp = creature
                .current_hp
                .saturating_add(heal_amount)
                .min(creature.stats.hp);
            if creature.current_hp == before {
                return ItemOutcome::NoEffect("HP is already full.".to_string());
            }
            ItemOutcome::Applied(format!("Restored {} HP!", creature.current_hp - before))
        }
        ItemKind::Revive { revive_percent } => {
            if !creature.is_fainted() {
                return ItemOutcome::NoEffect("It won't have any effect.".to_string());
            }
            let restored = ((creature.stats.hp as f64 * revive_percent).floor() as u32)
                .clamp(1, creature.stats.hp.max(1));
            creature.current_hp = restored;
            creature.fainted = false;
            ItemOutcome::Applied(format!("Revived with {restored} HP!"))
        }
        ItemKind::Capture { .. } => ItemOutcome::NoEffect("You can't use that here.".to_string()),
        ItemKind::Key => ItemOutcome::NoEffect("It had no effect.".to_string()),
    }
}
