use rand::Rng;
use tracing::{debug, trace, warn};

use super::spawn_order::{SpawnCursor, SpawnOrder, SpawnStrategy};
use super::spawn_pool::any_remaining;
use super::{EnemySpawnPool, EnemyType};
use crate::error::FormationError;

/// Default wait (seconds) before a formation starts spawning
pub const DEFAULT_FORMATION_DELAY: f32 = 1.0;

/// A group of spawn pools plus the policy used to pick from them.
///
/// The wave scheduler owns one of these per active formation. It reads
/// `formation_delay` before starting and `last_used_index` to look up
/// per-slot timing, then calls [`EnemyFormation::next_enemy_type`] until
/// [`EnemyFormation::contains_enemies`] turns false.
#[derive(Debug, Clone)]
pub struct EnemyFormation {
    /// Spawn pools in slot order
    enemies_to_spawn: Vec<EnemySpawnPool>,
    /// Seconds to wait before this formation starts
    formation_delay: f32,
    cursor: SpawnCursor,
}

impl EnemyFormation {
    pub fn new(
        enemies_to_spawn: Vec<EnemySpawnPool>,
        formation_delay: f32,
        spawn_order: SpawnOrder,
    ) -> Self {
        debug!(
            pools = enemies_to_spawn.len(),
            ?spawn_order,
            formation_delay,
            "built formation"
        );
        Self {
            enemies_to_spawn,
            formation_delay,
            cursor: SpawnCursor::from(spawn_order),
        }
    }

    pub fn pools(&self) -> &[EnemySpawnPool] {
        &self.enemies_to_spawn
    }

    pub fn formation_delay(&self) -> f32 {
        self.formation_delay
    }

    pub fn spawn_order(&self) -> SpawnOrder {
        self.cursor.order()
    }

    /// Slot touched by the most recent pick (or armed by the random initializer)
    pub fn last_used_index(&self) -> usize {
        self.cursor.last_used_index()
    }

    /// Spawn interval of the slot at [`Self::last_used_index`]
    pub fn current_spawn_interval(&self) -> Option<f32> {
        self.enemies_to_spawn
            .get(self.last_used_index())
            .map(|pool| pool.spawn_interval)
    }

    /// Does the formation still have enemies to spawn
    pub fn contains_enemies(&self) -> bool {
        any_remaining(&self.enemies_to_spawn)
    }

    /// Total enemies left across every pool
    pub fn remaining(&self) -> u64 {
        self.enemies_to_spawn
            .iter()
            .map(|pool| u64::from(pool.remaining()))
            .sum()
    }

    /// Arm the random policy so the first delay lookup is valid before the first pick.
    /// Does nothing for the other policies.
    pub fn initialize_first_random_index<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let SpawnCursor::Random(cursor) = &mut self.cursor {
            cursor.initialize_first_index(self.enemies_to_spawn.len(), rng);
            debug!(
                first_index = cursor.last_used_index(),
                "armed first random index"
            );
        }
    }

    /// Returns the type of the next enemy to be spawned, or `None` once the
    /// formation is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`FormationError::EmptyFormation`] when the random policy is
    /// asked to pick from a formation without any pools.
    pub fn next_enemy_type<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<EnemyType>, FormationError> {
        let picked = self
            .cursor
            .pick(&mut self.enemies_to_spawn, rng)
            .inspect_err(|err| warn!(%err, "cannot pick from formation"))?;

        trace!(slot = self.last_used_index(), enemy = ?picked, "picked");
        Ok(picked)
    }

    /// Refill every pool and rewind the cursor, so the formation can be replayed
    pub fn reset(&mut self) {
        for pool in &mut self.enemies_to_spawn {
            pool.reset();
        }
        self.cursor.reset();
        debug!(spawn_order = ?self.spawn_order(), "reset formation");
    }
}
