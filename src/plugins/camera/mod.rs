//! Camera plugin (render-only).
//!
//! One fixed 2D camera for every scene. The playfield is exactly one screen, so
//! there is nothing to follow; world origin sits at the screen center.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
