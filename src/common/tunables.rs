//! Tunable gameplay constants.
//!
//! Defaults match the shipped game. A RON file can override any subset of
//! fields; missing fields keep their default (`#[serde(default)]`).
//!
//! ```ron
//! (
//!     obstacle_interval_ms: 800,
//!     player_speed: 500.0,
//! )
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Overrides file, relative to the game's root folder.
pub const TUNABLES_FILE: &str = "assets/tunables.ron";

/// Where `game::run` looks for overrides. Resolved like Bevy's asset root:
/// `BEVY_ASSET_ROOT`, then `CARGO_MANIFEST_DIR`, then the executable's folder,
/// so the file is found regardless of the working directory.
pub fn tunables_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    asset_root(
        std::env::var_os("BEVY_ASSET_ROOT"),
        std::env::var_os("CARGO_MANIFEST_DIR"),
        exe_dir,
    )
    .join(TUNABLES_FILE)
}

fn asset_root(bevy_root: Option<OsString>, manifest_dir: Option<OsString>, exe_dir: Option<PathBuf>) -> PathBuf {
    bevy_root
        .or(manifest_dir)
        .map(PathBuf::from)
        .or(exe_dir)
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tunables: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid tunables: {0}")]
    Invalid(&'static str),
}

impl ConfigError {
    /// The file simply isn't there; callers treat this as "use defaults".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub bullet_lifetime_secs: f32,
    pub obstacle_interval_ms: u64,
    pub meteor_interval_ms: u64,
    pub enemy_interval_ms: u64,
    /// Slowest downward hazard speed (px/s).
    pub hazard_min_speed: f32,
    /// Hazard speed is drawn from `[min, min + spread)`.
    pub hazard_speed_spread: f32,
    pub points_per_hit: u64,
    pub points_per_enemy_kill: u64,
    pub background_scroll_speed: f32,
    /// Screen-space spawn points (origin top-left, y down).
    pub player_one_start: (f32, f32),
    pub player_two_start: (f32, f32),
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            screen_width: 1600.0,
            screen_height: 910.0,
            player_speed: 420.0,
            bullet_speed: 900.0,
            bullet_lifetime_secs: 3.0,
            obstacle_interval_ms: 1000,
            meteor_interval_ms: 5000,
            enemy_interval_ms: 3000,
            hazard_min_speed: 50.0,
            hazard_speed_spread: 100.0,
            points_per_hit: 100,
            points_per_enemy_kill: 100,
            background_scroll_speed: 120.0,
            player_one_start: (400.0, 300.0),
            player_two_start: (800.0, 300.0),
        }
    }
}

impl Tunables {
    pub fn from_ron_str(src: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = ron::from_str(src)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            self.pixels_per_meter,
            self.screen_width,
            self.screen_height,
            self.player_speed,
            self.bullet_speed,
            self.bullet_lifetime_secs,
            self.hazard_min_speed,
            self.hazard_speed_spread,
        ];
        if !positive.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(ConfigError::Invalid("sizes, speeds and lifetimes must be finite and positive"));
        }
        if !(self.background_scroll_speed.is_finite() && self.background_scroll_speed >= 0.0) {
            return Err(ConfigError::Invalid("background scroll speed must be finite and not negative"));
        }
        let (p1, p2) = (self.player_one_start, self.player_two_start);
        if ![p1.0, p1.1, p2.0, p2.1].iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid("player start points must be finite"));
        }
        // A huge min can swallow the spread and leave an empty range.
        if self.hazard_min_speed + self.hazard_speed_spread <= self.hazard_min_speed {
            return Err(ConfigError::Invalid("hazard speed range is empty"));
        }
        if self.obstacle_interval_ms == 0 || self.meteor_interval_ms == 0 || self.enemy_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn intervals must be non-zero"));
        }
        Ok(())
    }

    pub fn obstacle_interval(&self) -> Duration {
        Duration::from_millis(self.obstacle_interval_ms)
    }

    pub fn meteor_interval(&self) -> Duration {
        Duration::from_millis(self.meteor_interval_ms)
    }

    pub fn enemy_interval(&self) -> Duration {
        Duration::from_millis(self.enemy_interval_ms)
    }

    /// Map a screen-space point (origin top-left, y down) to world space
    /// (origin center, y up).
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x - self.screen_width * 0.5,
            self.screen_height * 0.5 - screen.y,
        )
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height) * 0.5
    }
}
