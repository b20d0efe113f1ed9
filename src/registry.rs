//! Read-only lookup tables handed to the engine by reference.

use crate::items::{Item, ItemKind};
use crate::model::{CaptureDevice, EncounterSlot, Move, Species};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MoveRegistry {
    moves: HashMap<String, Move>,
}

impl MoveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later registrations with the same id replace earlier ones.
    pub fn register(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.moves.insert(mv.id.clone(), mv);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Move> {
        self.moves.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.moves.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }
}

impl FromIterator<Move> for MoveRegistry {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut registry = MoveRegistry::new();
        registry.register(iter);
        registry
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: HashMap<String, Species>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, species: impl IntoIterator<Item = Species>) {
        for entry in species {
            self.species.insert(entry.id.clone(), entry);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.values()
    }
}

impl FromIterator<Species> for SpeciesRegistry {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut registry = SpeciesRegistry::new();
        registry.register(iter);
        registry
    }
}

/// Weighted wild-encounter slots keyed by location id.
#[derive(Debug, Clone, Default)]
pub struct EncounterTables {
    tables: HashMap<String, Vec<EncounterSlot>>,
}

impl EncounterTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: impl Into<String>, slots: Vec<EncounterSlot>) {
        self.tables.insert(location.into(), slots);
    }

    pub fn get(&self, location: &str) -> Option<&[EncounterSlot]> {
        self.tables.get(location).map(Vec::as_slice)
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Item>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, items: impl IntoIterator<Item = Item>) {
        for item in items {
            self.items.insert(item.id.clone(), item);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// The capture-formula view of a ball item; `None` for anything else.
    pub fn capture_device(&self, id: &str) -> Option<CaptureDevice> {
        let item = self.items.get(id)?;
        match item.kind {
            ItemKind::Capture { catch_modifier } => Some(CaptureDevice {
                id: item.id.clone(),
                name: item.name.clone(),
                catch_modifier,
            }),
            _ => None,
        }
    }
}

/// Every table the engine and its callers read from.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub moves: MoveRegistry,
    pub species: SpeciesRegistry,
    pub encounters: EncounterTables,
    pub items: ItemCatalog,
}

impl GameData {
    /// Bundled content shipped with the crate.
    pub fn builtin() -> Self {
        crate::data::BUILTIN.clone()
    }
}
