//! Hazards plugin: timed spawning of obstacles, meteors and enemies.
//!
//! ```text
//!  Update (Playing)
//!  ┌───────────────────────────────────────────────────────────────┐
//!  │ (A) tick_spawn_schedule                                       │
//!  │     - reads: Time, SpawnSchedule                              │
//!  │     - writes: SpawnHazard message (one per completed period)  │
//!  │                                                               │
//!  │ (B) spawn_hazards                                             │
//!  │     - reads: SpawnHazard messages, Tunables, SpawnRng         │
//!  │     - inserts: Hazard entities (factory output → world space) │
//!  └───────────────────────────────────────────────────────────────┘
//!  PostUpdate (Playing)
//!    (C) despawn_offscreen_hazards
//! ```
//!
//! The schedule is reset on entering `Playing` and only ticks while `Playing`, so
//! nothing spawns into the game-over scene. Hazards are scoped to `Playing`.

pub mod factory;
pub mod schedule;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

pub use factory::{FallSpeed, HazardKind, HazardSpawn, roll_hazard};
pub use schedule::SpawnSchedule;

/// Anything that ends the game on contact with a player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hazard {
    pub kind: HazardKind,
}

/// Producer → consumer spawn intent.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnHazard {
    pub kind: HazardKind,
}

/// Random source for the factory. OS-seeded unless a test inserts its own first.
#[derive(Resource)]
pub struct SpawnRng(pub SmallRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SpawnRng>()
        .init_resource::<SpawnSchedule>()
        .add_message::<SpawnHazard>();

    app.add_systems(OnEnter(GameState::Playing), reset_schedule);

    app.add_systems(
        Update,
        (tick_spawn_schedule, spawn_hazards.after(tick_spawn_schedule))
            .run_if(in_state(GameState::Playing)),
    );

    app.add_systems(
        PostUpdate,
        despawn_offscreen_hazards.run_if(in_state(GameState::Playing)),
    );
}

fn reset_schedule(tunables: Res<Tunables>, mut schedule: ResMut<SpawnSchedule>) {
    *schedule = SpawnSchedule::from_tunables(&tunables);
    info!(
        "Spawning timers started (obstacle {:?}, meteor {:?}, enemy {:?})",
        schedule.interval(HazardKind::Obstacle),
        schedule.interval(HazardKind::Meteor),
        schedule.interval(HazardKind::Enemy),
    );
}

fn tick_spawn_schedule(
    time: Res<Time>,
    mut schedule: ResMut<SpawnSchedule>,
    mut writer: MessageWriter<SpawnHazard>,
) {
    for kind in schedule.tick(time.delta()) {
        writer.write(SpawnHazard { kind });
    }
}

fn spawn_hazards(
    mut commands: Commands,
    mut reader: MessageReader<SpawnHazard>,
    tunables: Res<Tunables>,
    mut rng: ResMut<SpawnRng>,
) {
    let speed = FallSpeed {
        min: tunables.hazard_min_speed,
        spread: tunables.hazard_speed_spread,
    };

    for req in reader.read() {
        let rolled = roll_hazard(req.kind, tunables.screen_width, speed, &mut rng.0);
        debug!("Spawning {} at x={:.0}", rolled.kind.name(), rolled.position.x);
        spawn_hazard(&mut commands, &tunables, rolled);
    }
}

/// Insert a rolled hazard into the world.
pub fn spawn_hazard(commands: &mut Commands, tunables: &Tunables, rolled: HazardSpawn) -> Entity {
    let kind = rolled.kind;
    let size = kind.size();
    let pos = tunables.screen_to_world(rolled.position);
    // Screen y grows downward; world y grows upward.
    let vel = Vec2::new(rolled.velocity.x, -rolled.velocity.y);

    let collider = match kind {
        HazardKind::Meteor => Collider::circle(size.x * 0.5),
        HazardKind::Obstacle | HazardKind::Enemy => Collider::rectangle(size.x, size.y),
    };

    commands
        .spawn((
            Name::new(kind.name()),
            Hazard { kind },
            Sprite::from_color(kind.color(), size),
            Transform::from_translation(pos.extend(1.0)),
            RigidBody::Dynamic,
            collider,
            CollisionLayers::new(Layer::Hazard, [Layer::Player, Layer::PlayerBullet]),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity(vel),
            CollisionEventsEnabled,
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

/// Hazards that fell past the bottom edge are gone for good.
fn despawn_offscreen_hazards(
    mut commands: Commands,
    tunables: Res<Tunables>,
    q: Query<(Entity, &Hazard, &Transform)>,
) {
    let bottom = -tunables.half_extents().y;
    for (e, hazard, tf) in &q {
        if tf.translation.y + hazard.kind.size().y < bottom {
            commands.entity(e).try_despawn();
        }
    }
}
