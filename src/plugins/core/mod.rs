//! Core plugin: shared resources, global settings and the state machine driver.

use bevy::prelude::*;

use crate::common::state::{GameSignal, GameState};
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    // `game::configure_full` may already have inserted tunables loaded from disk.
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }
    app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.06)));

    app.add_message::<GameSignal>()
        .add_systems(Last, apply_game_signals);

    for state in [GameState::Intro, GameState::Playing, GameState::GameOver] {
        app.add_systems(OnEnter(state), move || info!("Entered {state:?}"));
    }
}

/// Single writer of `NextState<GameState>`.
///
/// Signals are drained once per frame in `Last`; the transition itself happens in the
/// next frame's `StateTransition` schedule. Every signal is judged against the state
/// the frame ran in, and the first accepted one wins.
pub(crate) fn apply_game_signals(
    mut signals: MessageReader<GameSignal>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let current = *state.get();
    let mut accepted = None;
    for signal in signals.read() {
        match (accepted, current.on_signal(*signal)) {
            (None, Some(to)) => {
                debug!("{signal:?}: {current:?} -> {to:?}");
                accepted = Some(to);
            }
            _ => debug!("{signal:?} ignored in {current:?}"),
        }
    }
    if let Some(to) = accepted {
        next.set(to);
    }
}
