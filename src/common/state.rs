//! Global state machine.
//!
//! ```text
//! Intro --Start--> Playing --HazardContact--> GameOver
//! ```
//!
//! Nothing writes `NextState<GameState>` directly. Gameplay code writes a
//! `GameSignal` message and `plugins::core` feeds it through
//! [`GameState::on_signal`], so the transition table lives in one place.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Intro,
    Playing,
    GameOver,
}

/// Requests a scene change.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    /// Start button pressed on the intro screen.
    Start,
    /// A player touched a hazard.
    HazardContact,
}

impl GameState {
    /// Closed transition table. `None` means the signal is ignored in this state.
    ///
    /// `GameOver` is terminal: there is no restart path.
    pub fn on_signal(self, signal: GameSignal) -> Option<GameState> {
        match (self, signal) {
            (GameState::Intro, GameSignal::Start) => Some(GameState::Playing),
            (GameState::Playing, GameSignal::HazardContact) => Some(GameState::GameOver),
            _ => None,
        }
    }
}
