//! Spawn consumer and lifetime for bullets.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

use super::components::{Bullet, Lifetime};
use super::messages::FireRequest;

const BULLET_RADIUS: f32 = 4.0;

/// Consumer: turn every FireRequest into a bullet entity.
///
/// `CollisionEventsEnabled` is attached to bullets to opt in to collision events.
pub fn spawn_bullets(
    mut commands: Commands,
    mut reader: MessageReader<FireRequest>,
    tunables: Res<Tunables>,
) {
    let layers = CollisionLayers::new(Layer::PlayerBullet, [Layer::Hazard]);

    for req in reader.read() {
        commands.spawn((
            Name::new("Bullet"),
            Bullet { shooter: req.shooter },
            Lifetime(Timer::from_seconds(tunables.bullet_lifetime_secs, TimerMode::Once)),
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Vec2::splat(BULLET_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(BULLET_RADIUS),
            layers,
            LinearVelocity(req.vel),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::Playing),
        ));
    }
}

pub fn bullet_lifetime(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).try_despawn();
        }
    }
}
