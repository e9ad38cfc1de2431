use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::player::{ControlScheme, Player};

use super::messages::FireRequest;

/// Muzzle offset from the ship's center, in the firing direction.
const MUZZLE_OFFSET: f32 = 18.0;

/// Producer: read each player's shoot key, then write a FireRequest message.
///
/// Ships always fire straight up the screen.
pub fn request_player_bullets(
    keys: Res<ButtonInput<KeyCode>>,
    q_players: Query<(&Player, &ControlScheme, &Transform)>,
    tunables: Res<Tunables>,
    mut writer: MessageWriter<FireRequest>,
) {
    for (player, scheme, tf) in &q_players {
        if !keys.just_pressed(scheme.shoot) {
            continue;
        }

        let origin = tf.translation.truncate();
        writer.write(FireRequest {
            shooter: player.slot,
            pos: origin + Vec2::Y * MUZZLE_OFFSET,
            vel: Vec2::Y * tunables.bullet_speed,
        });
    }
}
