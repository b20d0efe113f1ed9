//! Bundled moves, species, encounter tables and items.

use crate::items::{Item, ItemKind};
use crate::model::{
    ElementType, EncounterSlot, LearnsetEntry, Move, MoveCategory, Species, Stats,
};
use crate::registry::{EncounterTables, GameData, ItemCatalog, MoveRegistry, SpeciesRegistry};
use once_cell::sync::Lazy;
use phf::phf_map;
use ElementType::*;

pub struct MoveDef {
    pub name: &'static str,
    pub move_type: ElementType,
    pub category: MoveCategory,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: u32,
    pub priority: i32,
    pub effect: Option<&'static str>,
    pub description: &'static str,
}

pub struct SpeciesDef {
    pub name: &'static str,
    pub types: &'static [ElementType],
    pub base_stats: Stats,
    pub catch_rate: Option<u32>,
    pub learnset: &'static [(u32, &'static str)],
}

pub struct SlotDef {
    pub species: &'static str,
    pub min_level: u32,
    pub max_level: u32,
    pub weight: u32,
}

pub struct ItemDef {
    pub name: &'static str,
    pub kind: ItemKind,
    pub description: &'static str,
    pub price: u32,
}

const fn stats(
    hp: u32,
    attack: u32,
    defense: u32,
    sp_attack: u32,
    sp_defense: u32,
    speed: u32,
) -> Stats {
    Stats {
        hp,
        attack,
        defense,
        sp_attack,
        sp_defense,
        speed,
    }
}

pub static MOVES: phf::Map<&'static str, MoveDef> = phf_map! {
    "tackle" => MoveDef {
        name: "Tackle",
        move_type: Normal,
        category: MoveCategory::Physical,
        power: Some(40),
        accuracy: Some(95),
        pp: 35,
        priority: 0,
        effect: None,
        description: "A physical attack in which the user charges and slams into the target.",
    },
    "ember" => MoveDef {
        name: "Ember",
        move_type: Fire,
        category: MoveCategory::Special,
        power: Some(40),
        accuracy: Some(100),
        pp: 25,
        priority: 0,
        effect: None,
        description: "The target is attacked with small flames.",
    },
    "vinewhip" => MoveDef {
        name: "Vine Whip",
        move_type: Grass,
        category: MoveCategory::Physical,
        power: Some(45),
        accuracy: Some(100),
        pp: 25,
        priority: 0,
        effect: None,
        description: "The target is struck with slender, whiplike vines.",
    },
    "watergun" => MoveDef {
        name: "Water Gun",
        move_type: Water,
        category: MoveCategory::Special,
        power: Some(40),
        accuracy: Some(100),
        pp: 25,
        priority: 0,
        effect: None,
        description: "The target is blasted with a forceful shot of water.",
    },
    "poisonsting" => MoveDef {
        name: "Poison Sting",
        move_type: Poison,
        category: MoveCategory::Physical,
        power: Some(15),
        accuracy: Some(100),
        pp: 35,
        priority: 0,
        effect: Some("poison"),
        description: "The user stabs the target with a toxic barb. It may poison the target.",
    },
    "thundershock" => MoveDef {
        name: "Thunder Shock",
        move_type: Electric,
        category: MoveCategory::Special,
        power: Some(40),
        accuracy: Some(100),
        pp: 30,
        priority: 0,
        effect: Some("paralysis"),
        description: "A jolt of electricity crashes down on the target. It may paralyze the target.",
    },
    "sleeppowder" => MoveDef {
        name: "Sleep Powder",
        move_type: Grass,
        category: MoveCategory::Status,
        power: None,
        accuracy: Some(75),
        pp: 15,
        priority: 0,
        effect: Some("sleep"),
        description: "The user scatters a cloud of soporific dust.",
    },
    "quickattack" => MoveDef {
        name: "Quick Attack",
        move_type: Normal,
        category: MoveCategory::Physical,
        power: Some(40),
        accuracy: Some(100),
        pp: 30,
        priority: 1,
        effect: None,
        description: "The user lunges at the target at a speed that makes it almost invisible.",
    },
};

pub static SPECIES: phf::Map<&'static str, SpeciesDef> = phf_map! {
    "sprout" => SpeciesDef {
        name: "Sprout",
        types: &[Grass],
        base_stats: stats(45, 49, 49, 65, 65, 45),
        catch_rate: Some(255),
        learnset: &[(1, "tackle"), (5, "vinewhip"), (7, "sleeppowder")],
    },
    "sparkit" => SpeciesDef {
        name: "Sparkit",
        types: &[Electric],
        base_stats: stats(35, 55, 40, 50, 50, 90),
        catch_rate: Some(190),
        learnset: &[(1, "tackle"), (4, "thundershock"), (8, "quickattack")],
    },
    "flamara" => SpeciesDef {
        name: "Flamara",
        types: &[Fire],
        base_stats: stats(39, 52, 43, 60, 50, 65),
        catch_rate: Some(45),
        learnset: &[(1, "tackle"), (4, "ember"), (7, "quickattack")],
    },
    "flameling" => SpeciesDef {
        name: "Flameling",
        types: &[Fire],
        base_stats: stats(39, 52, 43, 60, 50, 65),
        catch_rate: None,
        learnset: &[(1, "tackle"), (3, "ember")],
    },
    "sproutle" => SpeciesDef {
        name: "Sproutle",
        types: &[Grass],
        base_stats: stats(45, 49, 49, 65, 65, 45),
        catch_rate: None,
        learnset: &[(1, "tackle"), (3, "vinewhip"), (6, "poisonsting")],
    },
    "aquabub" => SpeciesDef {
        name: "Aquabub",
        types: &[Water],
        base_stats: stats(44, 48, 65, 50, 64, 43),
        catch_rate: None,
        learnset: &[(1, "tackle"), (3, "watergun")],
    },
};

pub static ENCOUNTERS: phf::Map<&'static str, &'static [SlotDef]> = phf_map! {
    "meadow" => &[
        SlotDef { species: "sprout", min_level: 2, max_level: 5, weight: 60 },
        SlotDef { species: "sparkit", min_level: 3, max_level: 6, weight: 30 },
        SlotDef { species: "flamara", min_level: 2, max_level: 4, weight: 10 },
    ],
    "cave" => &[
        SlotDef { species: "flamara", min_level: 5, max_level: 8, weight: 40 },
        SlotDef { species: "sparkit", min_level: 4, max_level: 7, weight: 20 },
        SlotDef { species: "sprout", min_level: 4, max_level: 7, weight: 40 },
    ],
};

pub static ITEMS: phf::Map<&'static str, ItemDef> = phf_map! {
    "potion" => ItemDef {
        name: "Potion",
        kind: ItemKind::Potion { heal_amount: 20 },
        description: "Restores 20 HP.",
        price: 300,
    },
    "super_potion" => ItemDef {
        name: "Super Potion",
        kind: ItemKind::Potion { heal_amount: 50 },
        description: "Restores 50 HP.",
        price: 700,
    },
    "revive" => ItemDef {
        name: "Revive",
        kind: ItemKind::Revive { revive_percent: 0.5 },
        description: "Revives a fainted creature with half HP.",
        price: 1500,
    },
    "pokeball" => ItemDef {
        name: "Pokeball",
        kind: ItemKind::Capture { catch_modifier: 1.0 },
        description: "A device for catching wild creatures.",
        price: 200,
    },
    "greatball" => ItemDef {
        name: "Great Ball",
        kind: ItemKind::Capture { catch_modifier: 1.5 },
        description: "A good, high-performance Ball.",
        price: 600,
    },
    "masterball" => ItemDef {
        name: "Master Ball",
        kind: ItemKind::Capture { catch_modifier: 1.0 },
        description: "Catches any wild creature without fail.",
        price: 0,
    },
};

fn to_move(id: &str, def: &MoveDef) -> Move {
    Move {
        id: id.to_string(),
        name: def.name.to_string(),
        move_type: def.move_type,
        category: def.category,
        power: def.power,
        accuracy: def.accuracy,
        pp: def.pp,
        max_pp: def.pp,
        priority: def.priority,
        description: Some(def.description.to_string()),
        effect_id: def.effect.map(str::to_string),
    }
}

fn to_species(id: &str, def: &SpeciesDef) -> Species {
    Species {
        id: id.to_string(),
        name: def.name.to_string(),
        types: def.types.to_vec(),
        base_stats: def.base_stats,
        catch_rate: def.catch_rate,
        learnset: def
            .learnset
            .iter()
            .map(|&(level, move_id)| LearnsetEntry {
                level,
                move_id: move_id.to_string(),
            })
            .collect(),
    }
}

fn to_slots(slots: &[SlotDef]) -> Vec<EncounterSlot> {
    slots
        .iter()
        .map(|slot| EncounterSlot {
            species_id: slot.species.to_string(),
            min_level: slot.min_level,
            max_level: slot.max_level,
            weight: slot.weight as f64,
        })
        .collect()
}

fn to_item(id: &str, def: &ItemDef) -> Item {
    Item {
        id: id.to_string(),
        name: def.name.to_string(),
        kind: def.kind,
        description: Some(def.description.to_string()),
        price: Some(def.price),
    }
}

pub(crate) static BUILTIN: Lazy<GameData> = Lazy::new(|| {
    let moves: MoveRegistry = MOVES.entries().map(|(id, def)| to_move(id, def)).collect();
    let species: SpeciesRegistry = SPECIES
        .entries()
        .map(|(id, def)| to_species(id, def))
        .collect();
    let mut encounters = EncounterTables::new();
    for (location, slots) in ENCOUNTERS.entries() {
        encounters.insert(*location, to_slots(slots));
    }
    let mut items = ItemCatalog::new();
    items.register(ITEMS.entries().map(|(id, def)| to_item(id, def)));
    GameData {
        moves,
        species,
        encounters,
        items,
    }
});

/// Bundled move definitions, ready for registration.
pub fn builtin_moves() -> Vec<Move> {
    BUILTIN.moves.iter().cloned().collect()
}
