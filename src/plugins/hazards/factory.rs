//! Entity factory: roll a spawn point and velocity for a hazard.
//!
//! Output is in screen space (origin top-left, y down) so the ranges read the same
//! as the playfield: `x ∈ [0, width)`, `y = 0`, `vy ∈ [min, min + spread)`.
//! The spawner converts to world space when it inserts the entity.

use bevy::prelude::*;
use rand::Rng;

/// Classification tag for everything that ends the game on contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HazardKind {
    Obstacle,
    Meteor,
    Enemy,
}

impl HazardKind {
    pub const ALL: [HazardKind; 3] = [HazardKind::Obstacle, HazardKind::Meteor, HazardKind::Enemy];

    pub fn name(self) -> &'static str {
        match self {
            HazardKind::Obstacle => "Obstacle",
            HazardKind::Meteor => "Meteor",
            HazardKind::Enemy => "Enemy",
        }
    }

    /// Sprite size; also the collider bounds.
    pub fn size(self) -> Vec2 {
        match self {
            HazardKind::Obstacle => Vec2::splat(50.0),
            HazardKind::Meteor => Vec2::splat(60.0),
            HazardKind::Enemy => Vec2::splat(40.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            HazardKind::Obstacle => Color::srgb(0.55, 0.5, 0.45),
            HazardKind::Meteor => Color::srgb(0.95, 0.55, 0.2),
            HazardKind::Enemy => Color::srgb(0.9, 0.25, 0.25),
        }
    }
}

/// A rolled hazard, not yet in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardSpawn {
    pub kind: HazardKind,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Speed range for falling hazards, px/s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallSpeed {
    pub min: f32,
    pub spread: f32,
}

impl Default for FallSpeed {
    fn default() -> Self {
        Self { min: 50.0, spread: 100.0 }
    }
}

/// Roll one hazard. Every kind falls straight down; meteors use the same
/// derivation as obstacles and enemies.
///
/// Panics on a non-finite width or an empty speed range (`Tunables::validate`
/// rejects both).
pub fn roll_hazard<R: Rng + ?Sized>(
    kind: HazardKind,
    screen_width: f32,
    speed: FallSpeed,
    rng: &mut R,
) -> HazardSpawn {
    let x = rng.random_range(0.0..screen_width);
    let vy = rng.random_range(speed.min..speed.min + speed.spread);

    HazardSpawn {
        kind,
        position: Vec2::new(x, 0.0),
        velocity: Vec2::new(0.0, vy),
    }
}
