//! World plugin: a scrolling starfield behind the action.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};

/// Star grid cell size in pixels; one star per cell.
const CELL: f32 = 80.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct Star;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_starfield)
        .add_systems(Update, scroll_starfield.run_if(in_state(GameState::Playing)));
}

/// Cheap integer hash so star placement is stable without an RNG.
fn hash2(x: i32, y: i32) -> u32 {
    let mut h = (x as u32).wrapping_mul(0x8da6_b343) ^ (y as u32).wrapping_mul(0xd816_3841);
    h ^= h >> 13;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^ (h >> 16)
}

fn unit(h: u32) -> f32 {
    (h & 0xffff) as f32 / 65_536.0
}

/// Spawn one star per grid cell, jittered inside the cell.
///
/// Asset-free: each star is a tiny solid-colour sprite.
fn spawn_starfield(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.half_extents();
    let cols = (tunables.screen_width / CELL).ceil() as i32;
    let rows = (tunables.screen_height / CELL).ceil() as i32;

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let h = hash2(x, y);
            let jitter = Vec2::new(unit(h), unit(h >> 16)) * CELL;
            let pos = Vec2::new(x as f32 * CELL - half.x, y as f32 * CELL - half.y) + jitter;
            let brightness = 0.4 + 0.6 * unit(h.rotate_left(7));
            let size = if h % 7 == 0 { 3.0 } else { 2.0 };

            commands.spawn((
                Star,
                Sprite::from_color(Color::srgb(brightness, brightness, brightness), Vec2::splat(size)),
                Transform::from_translation(pos.extend(0.0)),
                DespawnOnExit(GameState::Playing),
            ));
        });
}

/// Move stars down and wrap them back to the top edge.
fn scroll_starfield(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<&mut Transform, With<Star>>,
) {
    let half_h = tunables.half_extents().y;
    let dy = tunables.background_scroll_speed * time.delta_secs();

    for mut tf in &mut q {
        tf.translation.y -= dy;
        if tf.translation.y < -half_h {
            tf.translation.y += tunables.screen_height;
        }
    }
}
