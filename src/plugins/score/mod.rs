//! Score plugin: the session's running score.
//!
//! Points come from `HazardDestroyed` messages. Two award paths fire for the same
//! kill, mirroring the shipped game:
//! - any hazard a player shoots down pays `points_per_hit`;
//! - an enemy additionally pays `points_per_enemy_kill`.
//!
//! The score lives for the whole process; there is no restart path to reset it.
//! The visible label is owned by `plugins::ui::hud` and refreshed here.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::hazards::HazardKind;
use crate::plugins::projectiles::collision::process_bullet_hits;
use crate::plugins::projectiles::messages::HazardDestroyed;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(u64);

impl Score {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn add(&mut self, points: u64) {
        self.0 = self.0.saturating_add(points);
    }

    pub fn label(self) -> String {
        format!("Score: {}", self.0)
    }
}

/// Marker for the text entity that shows the score.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScoreLabel;

pub fn plugin(app: &mut App) {
    app.init_resource::<Score>();

    app.add_systems(
        PostUpdate,
        (
            award_kill_points.after(process_bullet_hits),
            refresh_score_label
                .after(award_kill_points)
                .run_if(resource_changed::<Score>),
        )
            .run_if(in_state(GameState::Playing)),
    );
}

fn award_kill_points(
    mut destroyed: MessageReader<HazardDestroyed>,
    tunables: Res<Tunables>,
    mut score: ResMut<Score>,
) {
    for ev in destroyed.read() {
        let points = kill_points(ev.kind, &tunables);
        score.add(points);
        debug!("{:?} shot down {} (+{points})", ev.by, ev.kind.name());
    }
}

/// Points for one kill: the shooter's hit award, plus the enemy bonus.
pub fn kill_points(kind: HazardKind, tunables: &Tunables) -> u64 {
    let bonus = match kind {
        HazardKind::Enemy => tunables.points_per_enemy_kill,
        HazardKind::Obstacle | HazardKind::Meteor => 0,
    };
    tunables.points_per_hit.saturating_add(bonus)
}

fn refresh_score_label(score: Res<Score>, mut q: Query<&mut Text, With<ScoreLabel>>) {
    for mut text in &mut q {
        text.0 = score.label();
    }
}
