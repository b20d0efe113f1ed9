use serde::{Deserialize, Serialize};

/// Append-only narrative of a battle, one human-readable line per event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "poketsu_battle::log", "{line}");
        self.lines.push(line);
    }

    pub fn log_move(&mut self, user: &str, move_name: &str, damage: u32) {
        self.push(format!("{user} used {move_name}! It dealt {damage} damage."));
    }

    pub fn log_status_move(&mut self, user: &str, move_name: &str) {
        self.push(format!("{user} used {move_name}!"));
    }

    pub fn log_effectiveness(&mut self, multiplier: f64) {
        if multiplier >= 2.0 {
            self.push("It's super effective!");
        } else if multiplier == 0.0 {
            self.push("It had no effect...");
        } else if multiplier < 1.0 {
            self.push("It's not very effective...");
        }
    }

    pub fn log_miss(&mut self, user: &str, move_name: &str) {
        self.push(format!("{user}'s {move_name} missed!"));
    }

    pub fn log_faint(&mut self, name: &str) {
        self.push(format!("{name} fainted!"));
    }

    pub fn log_no_pp(&mut self, user: &str, move_name: &str) {
        self.push(format!("{user} has no PP left for {move_name}!"));
    }

    pub fn log_failed(&mut self) {
        self.push("But it failed!");
    }

    pub fn log_status(&mut self, target: &str, status: &str) {
        self.push(format!("{target} is afflicted with {status}!"));
    }

    pub fn log_wake(&mut self, name: &str) {
        self.push(format!("{name} woke up!"));
    }

    pub fn log_asleep(&mut self, name: &str) {
        self.push(format!("{name} is fast asleep..."));
    }

    pub fn log_paralyzed(&mut self, name: &str) {
        self.push(format!("{name} is paralyzed! It can't move!"));
    }

    pub fn log_poison(&mut self, name: &str, damage: u32) {
        self.push(format!("{name} is hurt by poison! (-{damage})"));
    }

    pub fn log_exp(&mut self, name: &str, gained: u64) {
        self.push(format!("{name} gained {gained} EXP!"));
    }

    pub fn log_level_up(&mut self, name: &str, level: u32) {
        self.push(format!("{name} grew to Lv. {level}!"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}
