use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which kind of enemy a spawn pool hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    Basic,
    Fast,
    Tank,
}

impl EnemyType {
    pub const ALL: [EnemyType; 3] = [EnemyType::Basic, EnemyType::Fast, EnemyType::Tank];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyType::Basic => "basic",
            EnemyType::Fast => "fast",
            EnemyType::Tank => "tank",
        }
    }
}

impl fmt::Display for EnemyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
