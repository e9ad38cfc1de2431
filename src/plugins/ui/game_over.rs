//! Game-over screen. Terminal: nothing leaves it.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::score::Score;

use super::{centered_column, label};

#[derive(Component, Debug, Clone, Copy)]
pub struct FinalScoreLabel;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::GameOver), spawn_game_over);
}

pub(super) fn spawn_game_over(mut commands: Commands, score: Res<Score>) {
    info!("Game over with {}", score.label());

    commands.spawn((
        Name::new("GameOverScreen"),
        centered_column(),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
        DespawnOnExit(GameState::GameOver),
        children![
            label("Game Over", 60.0),
            (FinalScoreLabel, label(format!("Final {}", score.label()), 30.0)),
        ],
    ));
}
