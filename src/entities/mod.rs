mod enemy;
mod formation;
mod spawn_order;
mod spawn_pool;

// Re-export all public types
pub use enemy::EnemyType;
pub use formation::{DEFAULT_FORMATION_DELAY, EnemyFormation};
pub use spawn_order::{AllFromOne, RandomPick, Rotating, SpawnCursor, SpawnOrder, SpawnStrategy};
pub use spawn_pool::EnemySpawnPool;
