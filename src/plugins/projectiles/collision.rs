use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::contacts::oriented;
use crate::plugins::hazards::Hazard;

use super::components::Bullet;
use super::messages::HazardDestroyed;

/// Bulk collision processing for bullet hits.
///
/// A bullet that reaches a hazard removes both and reports the kill.
/// Each bullet and each hazard counts once per frame, however many contact
/// pairs avian reports for it.
pub fn process_bullet_hits(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_bullets: Query<&Bullet>,
    q_hazards: Query<&Hazard>,
    mut destroyed: MessageWriter<HazardDestroyed>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let Some((bullet_side, other_side)) = oriented(ev, |e| q_bullets.contains(e)) else {
            continue;
        };

        let bullet_e = bullet_side.gameplay_owner();
        let hazard_e = other_side.gameplay_owner();

        let Ok(hazard) = q_hazards.get(hazard_e) else {
            continue;
        };
        let Ok(bullet) = q_bullets.get(bullet_e) else {
            continue;
        };

        if seen.contains(&bullet_e) || seen.contains(&hazard_e) {
            continue;
        }
        seen.insert(bullet_e);
        seen.insert(hazard_e);

        commands.entity(bullet_e).try_despawn();
        commands.entity(hazard_e).try_despawn();

        destroyed.write(HazardDestroyed {
            kind: hazard.kind,
            by: bullet.shooter,
        });
    }
}
