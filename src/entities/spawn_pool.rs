use serde::{Deserialize, Serialize};

use super::EnemyType;

/// A bounded source of a single enemy type.
///
/// The pool hands out `count` enemies and then reports exhaustion with `None`.
/// `spawn_interval` is the delay (seconds) the wave timer waits between two
/// spawns taken from this slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawnPool {
    pub enemy_type: EnemyType,
    pub count: u32,
    #[serde(default)]
    pub spawn_interval: f32,
    #[serde(skip)]
    spawned: u32,
}

impl EnemySpawnPool {
    pub fn new(enemy_type: EnemyType, count: u32) -> Self {
        Self {
            enemy_type,
            count,
            spawn_interval: 0.0,
            spawned: 0,
        }
    }

    pub fn with_spawn_interval(mut self, spawn_interval: f32) -> Self {
        self.spawn_interval = spawn_interval;
        self
    }

    pub fn enemies_spawned(&self) -> u32 {
        self.spawned
    }

    pub fn remaining(&self) -> u32 {
        self.count.saturating_sub(self.spawned)
    }

    pub fn is_exhausted(&self) -> bool {
        self.spawned >= self.count
    }

    /// Take one enemy from the pool, or `None` once `count` have been handed out
    pub fn get_enemy(&mut self) -> Option<EnemyType> {
        if self.is_exhausted() {
            return None;
        }
        self.spawned += 1;
        Some(self.enemy_type)
    }

    pub fn reset(&mut self) {
        self.spawned = 0;
    }
}

/// True while at least one pool still has enemies to give
pub(crate) fn any_remaining(pools: &[EnemySpawnPool]) -> bool {
    pools.iter().any(|pool| !pool.is_exhausted())
}
