//! Intro screen: title plus a Start button.
//!
//! Clicking Start (or pressing Enter/Space) sends `GameSignal::Start`.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::{GameSignal, GameState};

use super::{centered_column, label};

#[derive(Component, Debug, Clone, Copy)]
pub struct StartButton;

const START_KEYS: [KeyCode; 2] = [KeyCode::Enter, KeyCode::Space];

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Intro), spawn_intro)
        .add_systems(OnExit(GameState::Intro), || info!("Intro scene deactivated"))
        .add_systems(Update, start_on_press.run_if(in_state(GameState::Intro)));
}

pub(super) fn spawn_intro(mut commands: Commands) {
    commands.spawn((
        Name::new("IntroScreen"),
        centered_column(),
        BackgroundColor(Color::srgb(0.03, 0.03, 0.1)),
        DespawnOnExit(GameState::Intro),
        children![
            label("ARCADE SHOOTER", 72.0),
            (
                Name::new("StartButton"),
                StartButton,
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(32.0), Val::Px(12.0)),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.45, 0.8)),
                children![label("Start", 36.0)],
            ),
        ],
    ));
}

pub(super) fn start_on_press(
    keys: Res<ButtonInput<KeyCode>>,
    q_button: Query<&Interaction, (Changed<Interaction>, With<StartButton>)>,
    mut signals: MessageWriter<GameSignal>,
) {
    let clicked = q_button.iter().any(|i| *i == Interaction::Pressed);
    if clicked || keys.any_just_pressed(START_KEYS) {
        signals.write(GameSignal::Start);
    }
}
