//! Game configuration types.
//!
//! Hosts configure the game at startup by providing:
//! - `GridConfig`: Board shape for one difficulty
//! - `GameConfig`: All grids plus the global timing and scoring tunables
//!
//! Configs are plain serde data, so they can be bundled as JSON and loaded
//! with [`GameConfig::from_json`]. Grids are looked up by [`Difficulty`] only.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Difficulty level, the key for grid lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Board shape for one difficulty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Difficulty this grid is used for.
    pub difficulty: Difficulty,

    /// Number of card rows.
    pub rows: u32,

    /// Number of card columns.
    pub columns: u32,

    /// Distance between neighbouring card centres, in world units.
    pub card_spacing: f32,
}

impl GridConfig {
    /// Create a grid with unit spacing.
    pub fn new(difficulty: Difficulty, rows: u32, columns: u32) -> Self {
        Self {
            difficulty,
            rows,
            columns,
            card_spacing: 1.0,
        }
    }

    /// Set the card spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.card_spacing = spacing;
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    /// Check that the grid pairs up exactly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_count() == 0 {
            return Err(ConfigError::EmptyGrid(self.difficulty));
        }
        if self.card_count() % 2 != 0 {
            return Err(ConfigError::OddGrid {
                difficulty: self.difficulty,
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !self.card_spacing.is_finite() || self.card_spacing < 0.0 {
            return Err(ConfigError::InvalidTunable {
                name: "card_spacing",
                value: self.card_spacing,
            });
        }
        Ok(())
    }
}

/// Complete game configuration.
///
/// Durations are stored in seconds (as bundled config files write them) and
/// exposed as [`Duration`] through accessor methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid per difficulty.
    pub grids: Vec<GridConfig>,

    /// Length of the flip animation, seconds. Informational for the view.
    pub card_flip_duration: f32,

    /// Wait between the second reveal and the match decision, seconds.
    pub match_check_delay: f32,

    /// Points for a match at combo 1.
    pub base_score: u32,

    /// Growth factor per combo step.
    pub combo_multiplier: f32,

    /// Longest gap between matches that keeps a combo alive, seconds.
    pub max_combo_time: f32,

    /// Number of card slots in the pool.
    pub pool_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grids: vec![
                GridConfig::new(Difficulty::Easy, 3, 4).with_spacing(1.2),
                GridConfig::new(Difficulty::Medium, 4, 4).with_spacing(1.2),
                GridConfig::new(Difficulty::Hard, 6, 6).with_spacing(1.1),
            ],
            card_flip_duration: 0.3,
            match_check_delay: 1.0,
            base_score: 100,
            combo_multiplier: 1.5,
            max_combo_time: 2.0,
            pool_capacity: 100,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default tunables and no grids.
    pub fn new() -> Self {
        Self {
            grids: Vec::new(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Add or replace the grid for its difficulty.
    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grids.retain(|g| g.difficulty != grid.difficulty);
        self.grids.push(grid);
        self
    }

    /// Set the match check delay in seconds.
    #[must_use]
    pub fn with_match_check_delay(mut self, seconds: f32) -> Self {
        self.match_check_delay = seconds;
        self
    }

    /// Set base score and combo multiplier.
    #[must_use]
    pub fn with_scoring(mut self, base_score: u32, combo_multiplier: f32) -> Self {
        self.base_score = base_score;
        self.combo_multiplier = combo_multiplier;
        self
    }

    /// Set the combo window in seconds.
    #[must_use]
    pub fn with_max_combo_time(mut self, seconds: f32) -> Self {
        self.max_combo_time = seconds;
        self
    }

    /// Set the pool capacity.
    #[must_use]
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Look up the grid for a difficulty and check it.
    pub fn grid(&self, difficulty: Difficulty) -> Result<&GridConfig, ConfigError> {
        let grid = self
            .grids
            .iter()
            .find(|g| g.difficulty == difficulty)
            .ok_or(ConfigError::UnknownDifficulty(difficulty))?;
        grid.validate()?;
        Ok(grid)
    }

    /// Flip animation length.
    #[must_use]
    pub fn card_flip_duration(&self) -> Duration {
        seconds(self.card_flip_duration)
    }

    /// Delay before a revealed pair is resolved.
    #[must_use]
    pub fn match_check_delay(&self) -> Duration {
        seconds(self.match_check_delay)
    }

    /// Combo window.
    #[must_use]
    pub fn max_combo_time(&self) -> Duration {
        seconds(self.max_combo_time)
    }

    /// Check tunables and every grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("card_flip_duration", self.card_flip_duration),
            ("match_check_delay", self.match_check_delay),
            ("max_combo_time", self.max_combo_time),
        ] {
            if Duration::try_from_secs_f32(value).is_err() {
                return Err(ConfigError::InvalidTunable { name, value });
            }
        }
        if !self.combo_multiplier.is_finite() || self.combo_multiplier < 1.0 {
            return Err(ConfigError::InvalidTunable {
                name: "combo_multiplier",
                value: self.combo_multiplier,
            });
        }
        if self.pool_capacity == 0 {
            return Err(ConfigError::ZeroPoolCapacity);
        }

        for (i, grid) in self.grids.iter().enumerate() {
            grid.validate()?;
            if self.grids[..i].iter().any(|g| g.difficulty == grid.difficulty) {
                return Err(ConfigError::DuplicateDifficulty(grid.difficulty));
            }
        }
        Ok(())
    }
}

/// Seconds to `Duration`. Negative and NaN map to zero, oversized values
/// saturate.
fn seconds(value: f32) -> Duration {
    if value.is_nan() || value <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(value).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_check_delay(), Duration::from_secs(1));
        assert_eq!(config.base_score, 100);
        assert_eq!(config.pool_capacity, 100);

        for difficulty in Difficulty::ALL {
            assert!(config.grid(difficulty).is_ok());
        }
    }

    #[test]
    fn test_grid_counts() {
        let grid = GridConfig::new(Difficulty::Medium, 4, 5);
        assert_eq!(grid.card_count(), 20);
        assert_eq!(grid.pair_count(), 10);
    }

    #[test]
    fn test_odd_grid_rejected() {
        let config = GameConfig::new().with_grid(GridConfig::new(Difficulty::Easy, 3, 3));
        assert!(matches!(
            config.grid(Difficulty::Easy),
            Err(ConfigError::OddGrid { rows: 3, columns: 3, .. })
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_grid_rejected() {
        let config = GameConfig::new().with_grid(GridConfig::new(Difficulty::Easy, 0, 4));
        assert!(matches!(
            config.grid(Difficulty::Easy),
            Err(ConfigError::EmptyGrid(Difficulty::Easy))
        ));
    }

    #[test]
    fn test_unknown_difficulty() {
        let config = GameConfig::new().with_grid(GridConfig::new(Difficulty::Easy, 2, 2));
        assert!(matches!(
            config.grid(Difficulty::Hard),
            Err(ConfigError::UnknownDifficulty(Difficulty::Hard))
        ));
    }

    #[test]
    fn test_with_grid_replaces_same_difficulty() {
        let config = GameConfig::new()
            .with_grid(GridConfig::new(Difficulty::Easy, 2, 2))
            .with_grid(GridConfig::new(Difficulty::Easy, 2, 4));

        assert_eq!(config.grids.len(), 1);
        assert_eq!(config.grid(Difficulty::Easy).unwrap().columns, 4);
    }

    #[test]
    fn test_duplicate_difficulty_rejected() {
        let mut config = GameConfig::new();
        config.grids.push(GridConfig::new(Difficulty::Easy, 2, 2));
        config.grids.push(GridConfig::new(Difficulty::Easy, 2, 4));

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateDifficulty(Difficulty::Easy))
        ));
    }

    #[test]
    fn test_invalid_tunables() {
        let config = GameConfig::default().with_scoring(100, 0.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTunable { name: "combo_multiplier", .. })
        ));

        let config = GameConfig::default().with_match_check_delay(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTunable { name: "match_check_delay", .. })
        ));

        let config = GameConfig::default().with_pool_capacity(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPoolCapacity)));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{
            "grids": [
                { "difficulty": "Easy", "rows": 2, "columns": 2, "card_spacing": 1.5 }
            ],
            "base_score": 50
        }"#;

        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.base_score, 50);
        assert_eq!(config.combo_multiplier, 1.5);
        assert_eq!(config.grid(Difficulty::Easy).unwrap().card_spacing, 1.5);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let odd = r#"{ "grids": [ { "difficulty": "Hard", "rows": 5, "columns": 5, "card_spacing": 1.0 } ] }"#;
        assert!(matches!(
            GameConfig::from_json(odd),
            Err(ConfigError::OddGrid { .. })
        ));

        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_difficulty_parse_and_display() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_oversized_durations_are_rejected() {
        let config = GameConfig::default().with_max_combo_time(1e20);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTunable { name: "max_combo_time", .. })
        ));

        let config = GameConfig::default().with_match_check_delay(f32::INFINITY);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTunable { name: "match_check_delay", .. })
        ));
    }

    #[test]
    fn test_unvalidated_oversized_duration_saturates() {
        let config = GameConfig::default().with_max_combo_time(1e20);
        assert_eq!(config.max_combo_time(), Duration::MAX);
        assert_eq!(
            GameConfig::default().with_match_check_delay(-1.0).match_check_delay(),
            Duration::ZERO
        );
    }
}
