use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn_pool::{EnemySpawnPool, any_remaining};
use super::EnemyType;
use crate::error::FormationError;

/// How a formation walks its spawn pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpawnOrder {
    /// Drain each pool completely, in order, before moving to the next
    AllFromOne,
    /// Pick a random pool for every spawn
    #[default]
    Random,
    /// Take one enemy from each pool in turn, looping around
    Rotating,
}

/// A selection policy together with the cursor state it needs.
pub trait SpawnStrategy {
    /// Pick the next enemy type, or `Ok(None)` once the pools are exhausted
    fn pick<R: Rng + ?Sized>(
        &mut self,
        pools: &mut [EnemySpawnPool],
        rng: &mut R,
    ) -> Result<Option<EnemyType>, FormationError>;

    /// Index of the pool touched by the most recent pick
    fn last_used_index(&self) -> usize;

    /// Return the cursor to its freshly built state
    fn reset(&mut self);
}

/// Sequential, exhaustive walk. The cursor only ever moves forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllFromOne {
    current: usize,
    last_used: usize,
}

impl AllFromOne {
    pub fn current_index(&self) -> usize {
        self.current
    }
}

impl SpawnStrategy for AllFromOne {
    fn pick<R: Rng + ?Sized>(
        &mut self,
        pools: &mut [EnemySpawnPool],
        _rng: &mut R,
    ) -> Result<Option<EnemyType>, FormationError> {
        while let Some(pool) = pools.get_mut(self.current) {
            self.last_used = self.current;
            if let Some(enemy_type) = pool.get_enemy() {
                return Ok(Some(enemy_type));
            }
            // Pool drained, never come back to it
            self.current += 1;
        }
        Ok(None)
    }

    fn last_used_index(&self) -> usize {
        self.last_used
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Uniform random pick across pools, retrying on drained ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPick {
    last_used: usize,
    /// When set, the next pick reuses `last_used` instead of rolling
    first_pick_pending: bool,
}

impl Default for RandomPick {
    fn default() -> Self {
        Self {
            last_used: 0,
            first_pick_pending: true,
        }
    }
}

impl RandomPick {
    /// Roll the slot the first pick will use, so timing lookups keyed by
    /// `last_used_index` are valid before anything spawns.
    pub fn initialize_first_index<R: Rng + ?Sized>(&mut self, pool_count: usize, rng: &mut R) {
        self.first_pick_pending = true;
        self.last_used = if pool_count == 0 {
            0
        } else {
            rng.random_range(0..pool_count)
        };
    }

    pub fn first_pick_pending(&self) -> bool {
        self.first_pick_pending
    }
}

impl SpawnStrategy for RandomPick {
    fn pick<R: Rng + ?Sized>(
        &mut self,
        pools: &mut [EnemySpawnPool],
        rng: &mut R,
    ) -> Result<Option<EnemyType>, FormationError> {
        if pools.is_empty() {
            return Err(FormationError::EmptyFormation);
        }
        // Without this check the retry loop below would never end
        if !any_remaining(pools) {
            return Ok(None);
        }
        // An index armed for a different pool count falls back to the first slot
        if self.last_used >= pools.len() {
            self.last_used = 0;
        }

        loop {
            let index = if self.first_pick_pending {
                self.last_used
            } else {
                rng.random_range(0..pools.len())
            };
            self.first_pick_pending = false;
            self.last_used = index;

            if let Some(enemy_type) = pools.get_mut(index).and_then(EnemySpawnPool::get_enemy) {
                return Ok(Some(enemy_type));
            }
        }
    }

    fn last_used_index(&self) -> usize {
        self.last_used
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Round-robin over pools, skipping drained ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rotating {
    current: usize,
    last_used: usize,
}

impl Rotating {
    pub fn current_index(&self) -> usize {
        self.current
    }

    fn advance(&mut self, pool_count: usize) {
        self.current += 1;
        if self.current >= pool_count {
            self.current = 0;
        }
    }
}

impl SpawnStrategy for Rotating {
    fn pick<R: Rng + ?Sized>(
        &mut self,
        pools: &mut [EnemySpawnPool],
        _rng: &mut R,
    ) -> Result<Option<EnemyType>, FormationError> {
        let mut picked = None;
        if self.current >= pools.len() {
            self.current = 0;
        }

        if any_remaining(pools) {
            while picked.is_none() {
                self.last_used = self.current;
                picked = pools.get_mut(self.current).and_then(EnemySpawnPool::get_enemy);
                if picked.is_none() {
                    self.advance(pools.len());
                }
            }
        }

        // The next call starts one slot further along
        self.advance(pools.len());

        Ok(picked)
    }

    fn last_used_index(&self) -> usize {
        self.last_used
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The strategy a formation is running, chosen from its [`SpawnOrder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnCursor {
    AllFromOne(AllFromOne),
    Random(RandomPick),
    Rotating(Rotating),
}

impl From<SpawnOrder> for SpawnCursor {
    fn from(order: SpawnOrder) -> Self {
        match order {
            SpawnOrder::AllFromOne => SpawnCursor::AllFromOne(AllFromOne::default()),
            SpawnOrder::Random => SpawnCursor::Random(RandomPick::default()),
            SpawnOrder::Rotating => SpawnCursor::Rotating(Rotating::default()),
        }
    }
}

impl SpawnCursor {
    pub fn order(&self) -> SpawnOrder {
        match self {
            SpawnCursor::AllFromOne(_) => SpawnOrder::AllFromOne,
            SpawnCursor::Random(_) => SpawnOrder::Random,
            SpawnCursor::Rotating(_) => SpawnOrder::Rotating,
        }
    }
}

impl SpawnStrategy for SpawnCursor {
    fn pick<R: Rng + ?Sized>(
        &mut self,
        pools: &mut [EnemySpawnPool],
        rng: &mut R,
    ) -> Result<Option<EnemyType>, FormationError> {
        match self {
            SpawnCursor::AllFromOne(cursor) => cursor.pick(pools, rng),
            SpawnCursor::Random(cursor) => cursor.pick(pools, rng),
            SpawnCursor::Rotating(cursor) => cursor.pick(pools, rng),
        }
    }

    fn last_used_index(&self) -> usize {
        match self {
            SpawnCursor::AllFromOne(cursor) => cursor.last_used_index(),
            SpawnCursor::Random(cursor) => cursor.last_used_index(),
            SpawnCursor::Rotating(cursor) => cursor.last_used_index(),
        }
    }

    fn reset(&mut self) {
        match self {
            SpawnCursor::AllFromOne(cursor) => cursor.reset(),
            SpawnCursor::Random(cursor) => cursor.reset(),
            SpawnCursor::Rotating(cursor) => cursor.reset(),
        }
    }
}
