// Library exports for the previewer and for testing
pub use config::{FormationConfig, WaveConfig};
pub use entities::{
    DEFAULT_FORMATION_DELAY, EnemyFormation, EnemySpawnPool, EnemyType, SpawnCursor, SpawnOrder,
    SpawnStrategy,
};
pub use error::{ConfigError, FormationError};

pub mod config;
pub mod entities;
pub mod error;
pub mod logging;
