//! Wave definitions loaded from RON files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::entities::{DEFAULT_FORMATION_DELAY, EnemyFormation, EnemySpawnPool, SpawnOrder};
use crate::error::ConfigError;

fn default_formation_delay() -> f32 {
    DEFAULT_FORMATION_DELAY
}

/// One formation as written in a wave file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationConfig {
    pub enemies_to_spawn: Vec<EnemySpawnPool>,
    #[serde(default = "default_formation_delay")]
    pub formation_delay: f32,
    #[serde(default)]
    pub spawn_order: SpawnOrder,
}

/// A complete wave: formations are played in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub formations: Vec<FormationConfig>,
}

impl WaveConfig {
    /// Parse and validate a wave definition
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: WaveConfig = ron::from_str(source)?;
        config.validate()?;
        debug!(
            name = config.name.as_deref().unwrap_or("<unnamed>"),
            formations = config.formations.len(),
            "parsed wave"
        );
        Ok(config)
    }

    /// Read, parse and validate a wave file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        info!(path = %path.display(), "loaded wave file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formations.is_empty() {
            return Err(ConfigError::NoFormations);
        }

        for (formation, config) in self.formations.iter().enumerate() {
            if config.enemies_to_spawn.is_empty() {
                return Err(ConfigError::EmptyFormation { formation });
            }
            check_delay(formation, "formation_delay", config.formation_delay)?;
            for pool in &config.enemies_to_spawn {
                check_delay(formation, "spawn_interval", pool.spawn_interval)?;
            }
        }

        Ok(())
    }

    pub fn build_formations(&self) -> Vec<EnemyFormation> {
        self.formations.iter().map(EnemyFormation::from).collect()
    }

    /// Serialize back to pretty-printed RON
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }
}

fn check_delay(formation: usize, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDelay {
            formation,
            field,
            value,
        })
    }
}

impl From<&FormationConfig> for EnemyFormation {
    fn from(config: &FormationConfig) -> Self {
        EnemyFormation::new(
            config.enemies_to_spawn.clone(),
            config.formation_delay,
            config.spawn_order,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EnemyType;

    const TWO_FORMATIONS: &str = r#"
        (
            name: Some("Test wave"),
            formations: [
                (
                    formation_delay: 2.5,
                    spawn_order: AllFromOne,
                    enemies_to_spawn: [
                        (enemy_type: Basic, count: 3, spawn_interval: 0.5),
                        (enemy_type: Tank, count: 1),
                    ],
                ),
                (
                    enemies_to_spawn: [(enemy_type: Fast, count: 2)],
                ),
            ],
        )
    "#;

    #[test]
    fn test_parse_wave() {
        let config = WaveConfig::from_ron_str(TWO_FORMATIONS).unwrap();
        assert_eq!(config.name.as_deref(), Some("Test wave"));
        assert_eq!(config.formations.len(), 2);

        let first = &config.formations[0];
        assert_eq!(first.formation_delay, 2.5);
        assert_eq!(first.spawn_order, SpawnOrder::AllFromOne);
        assert_eq!(first.enemies_to_spawn[0].spawn_interval, 0.5);
        assert_eq!(first.enemies_to_spawn[1].enemy_type, EnemyType::Tank);
    }

    #[test]
    fn test_defaults_applied() {
        let config = WaveConfig::from_ron_str(TWO_FORMATIONS).unwrap();
        let second = &config.formations[1];
        assert_eq!(second.formation_delay, DEFAULT_FORMATION_DELAY);
        assert_eq!(second.spawn_order, SpawnOrder::Random);
        assert_eq!(second.enemies_to_spawn[0].spawn_interval, 0.0);
    }

    #[test]
    fn test_build_formations() {
        let config = WaveConfig::from_ron_str(TWO_FORMATIONS).unwrap();
        let formations = config.build_formations();
        assert_eq!(formations.len(), 2);
        assert_eq!(formations[0].remaining(), 4);
        assert_eq!(formations[0].formation_delay(), 2.5);
        assert_eq!(formations[1].spawn_order(), SpawnOrder::Random);
    }

    #[test]
    fn test_round_trip() {
        let config = WaveConfig::from_ron_str(TWO_FORMATIONS).unwrap();
        let written = config.to_ron_string().unwrap();
        assert_eq!(WaveConfig::from_ron_str(&written).unwrap(), config);
    }

    #[test]
    fn test_rejects_no_formations() {
        let err = WaveConfig::from_ron_str("(formations: [])").unwrap_err();
        assert!(matches!(err, ConfigError::NoFormations));
    }

    #[test]
    fn test_rejects_empty_formation() {
        let source = "(formations: [(enemies_to_spawn: [(enemy_type: Basic, count: 1)]), (enemies_to_spawn: [])])";
        let err = WaveConfig::from_ron_str(source).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFormation { formation: 1 }));
    }

    #[test]
    fn test_rejects_negative_delay() {
        let source = "(formations: [(formation_delay: -1.0, enemies_to_spawn: [(enemy_type: Basic, count: 1)])])";
        let err = WaveConfig::from_ron_str(source).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDelay {
                formation: 0,
                field: "formation_delay",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_spawn_interval() {
        let source = "(formations: [(enemies_to_spawn: [(enemy_type: Basic, count: 1, spawn_interval: -0.1)])])";
        let err = WaveConfig::from_ron_str(source).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDelay {
                field: "spawn_interval",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let source = "(formations: [(enemies_to_spawn: [(enemy_type: Dragon, count: 1)])])";
        let err = WaveConfig::from_ron_str(source).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_remaining_counts_past_u32() {
        let source = format!(
            "(formations: [(enemies_to_spawn: [(enemy_type: Basic, count: {}), (enemy_type: Tank, count: 1)])])",
            u32::MAX
        );
        let config = WaveConfig::from_ron_str(&source).unwrap();
        let formations = config.build_formations();
        assert_eq!(formations[0].remaining(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WaveConfig::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
