//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(Playing): spawn Player One (arrows + Enter)
//! - Update: deploy Player Two on the first WASD press, sample each player's keys
//! - FixedUpdate: apply velocity to kinematic rigid bodies (clamped to the screen)
//! - PostUpdate: any player touching a hazard sends `GameSignal::HazardContact`

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::contacts::oriented;
use crate::common::{layers::Layer, state::GameSignal, state::GameState, tunables::Tunables};
use crate::plugins::hazards::{Hazard, HazardKind};

const PLAYER_SIZE: f32 = 26.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub slot: PlayerSlot,
}

/// Key bindings for one player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub shoot: KeyCode,
}

impl ControlScheme {
    pub const ARROWS: Self = Self {
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        up: KeyCode::ArrowUp,
        down: KeyCode::ArrowDown,
        shoot: KeyCode::Enter,
    };

    pub const WASD: Self = Self {
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        up: KeyCode::KeyW,
        down: KeyCode::KeyS,
        shoot: KeyCode::Space,
    };

    pub fn movement_keys(&self) -> [KeyCode; 4] {
        [self.left, self.right, self.up, self.down]
    }

    /// Normalized movement axis in world space (y up).
    pub fn axis(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let mut axis = Vec2::ZERO;

        if keys.pressed(self.up) {
            axis.y += 1.0;
        }
        if keys.pressed(self.down) {
            axis.y -= 1.0;
        }
        if keys.pressed(self.left) {
            axis.x -= 1.0;
        }
        if keys.pressed(self.right) {
            axis.x += 1.0;
        }

        axis.normalize_or_zero()
    }
}

impl PlayerSlot {
    pub fn scheme(self) -> ControlScheme {
        match self {
            PlayerSlot::One => ControlScheme::ARROWS,
            PlayerSlot::Two => ControlScheme::WASD,
        }
    }

    fn color(self) -> Color {
        match self {
            PlayerSlot::One => Color::srgb(0.2, 0.75, 0.9),
            PlayerSlot::Two => Color::srgb(0.45, 0.9, 0.35),
        }
    }

    fn start(self, tunables: &Tunables) -> Vec2 {
        let (x, y) = match self {
            PlayerSlot::One => tunables.player_one_start,
            PlayerSlot::Two => tunables.player_two_start,
        };
        tunables.screen_to_world(Vec2::new(x, y))
    }
}

/// Latest sampled movement intent, written in Update and consumed in FixedUpdate.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct PlayerInput {
    pub move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_player_one)
        .add_systems(
            Update,
            (deploy_player_two, gather_input.after(deploy_player_two))
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            FixedUpdate,
            apply_movement.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            PostUpdate,
            end_game_on_hazard_contact.run_if(in_state(GameState::Playing)),
        );
}

/// Spawn a player in its slot with the slot's control scheme.
pub fn spawn_player(commands: &mut Commands, tunables: &Tunables, slot: PlayerSlot) -> Entity {
    let layers = CollisionLayers::new(Layer::Player, [Layer::Hazard]);

    commands
        .spawn((
            Name::new(format!("Player{slot:?}")),
            Player { slot },
            slot.scheme(),
            PlayerInput::default(),
            Sprite {
                color: slot.color(),
                custom_size: Some(Vec2::splat(PLAYER_SIZE)),
                ..default()
            },
            Transform::from_translation(slot.start(tunables).extend(2.0)),
            RigidBody::Kinematic,
            Collider::circle(PLAYER_SIZE * 0.5),
            layers,
            LinearVelocity::ZERO,
            CollisionEventsEnabled,
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

fn spawn_player_one(mut commands: Commands, tunables: Res<Tunables>) {
    spawn_player(&mut commands, &tunables, PlayerSlot::One);
    info!("Player 1 spawned");
}

/// First W/A/S/D press brings in Player Two. Later presses find it already present.
fn deploy_player_two(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    tunables: Res<Tunables>,
    q_players: Query<&Player>,
) {
    if !keys.any_just_pressed(PlayerSlot::Two.scheme().movement_keys()) {
        return;
    }
    if q_players.iter().any(|p| p.slot == PlayerSlot::Two) {
        return;
    }

    spawn_player(&mut commands, &tunables, PlayerSlot::Two);
    info!("Player 2 deployed");
}

fn gather_input(keys: Res<ButtonInput<KeyCode>>, mut q: Query<(&ControlScheme, &mut PlayerInput)>) {
    for (scheme, mut input) in &mut q {
        input.move_axis = scheme.axis(&keys);
    }
}

fn apply_movement(
    tunables: Res<Tunables>,
    mut q_players: Query<(&PlayerInput, &Transform, &mut LinearVelocity), With<Player>>,
) {
    let bounds = tunables.half_extents() - Vec2::splat(PLAYER_SIZE * 0.5);

    for (input, tf, mut vel) in &mut q_players {
        let mut v = input.move_axis * tunables.player_speed;
        let pos = tf.translation.truncate();

        // Stop at the screen edge instead of flying off.
        if (pos.x <= -bounds.x && v.x < 0.0) || (pos.x >= bounds.x && v.x > 0.0) {
            v.x = 0.0;
        }
        if (pos.y <= -bounds.y && v.y < 0.0) || (pos.y >= bounds.y && v.y > 0.0) {
            v.y = 0.0;
        }

        vel.0 = v;
    }
}

fn end_game_on_hazard_contact(
    mut started: MessageReader<CollisionStart>,
    q_players: Query<&Player>,
    q_hazards: Query<&Hazard>,
    mut signals: MessageWriter<GameSignal>,
) {
    for ev in started.read() {
        let Some((player_side, other_side)) = oriented(ev, |e| q_players.contains(e)) else {
            continue;
        };
        let Ok(hazard) = q_hazards.get(other_side.gameplay_owner()) else {
            continue;
        };
        let Ok(player) = q_players.get(player_side.gameplay_owner()) else {
            continue;
        };

        match hazard.kind {
            HazardKind::Obstacle | HazardKind::Meteor | HazardKind::Enemy => {
                info!("{:?} hit by {}", player.slot, hazard.kind.name());
                signals.write(GameSignal::HazardContact);
            }
        }
    }
}
