//! In-game HUD: the score label in the top-left corner.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::score::{Score, ScoreLabel};

use super::label;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_score_label);
}

pub(super) fn spawn_score_label(mut commands: Commands, score: Res<Score>) {
    commands.spawn((
        Name::new("ScoreLabel"),
        ScoreLabel,
        label(score.label(), 30.0),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(100.0),
            top: Val::Px(50.0),
            ..default()
        },
        DespawnOnExit(GameState::Playing),
    ));
}
