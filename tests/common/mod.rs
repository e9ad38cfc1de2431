//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `arcade_shooter::game::configure_headless` to install gameplay plugins.
//!
//! Time is driven manually: every `app.update()` advances virtual time by [`FRAME`],
//! so "simulate N ms" is exactly `N / FRAME` updates.
#![allow(dead_code)]

use std::time::Duration;

use arcade_shooter::common::state::{GameSignal, GameState};
use arcade_shooter::common::tunables::Tunables;
use arcade_shooter::plugins::hazards::{Hazard, HazardKind, SpawnRng};
use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

pub const FRAME: Duration = Duration::from_millis(100);

pub fn app_headless() -> App {
    app_with(Tunables::default())
}

pub fn app_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    // Keyboard state without InputPlugin: tests press keys and nothing clears them.
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(tunables);
    app.insert_resource(SpawnRng::seeded(0x5EED));

    arcade_shooter::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Tunables with Player One parked at the bottom edge, out of reach of
/// anything that spawns in the first few seconds.
pub fn safe_tunables() -> Tunables {
    let t = Tunables::default();
    Tunables {
        player_one_start: (100.0, t.screen_height - 30.0),
        ..t
    }
}

/// Boot into Intro and send the start signal. The next update enters Playing,
/// and that update is the first one whose time counts toward spawning.
pub fn start_game(app: &mut App) {
    app.update();
    assert_eq!(state(app), GameState::Intro);
    app.world_mut().write_message(GameSignal::Start);
    app.update();
}

pub fn advance(app: &mut App, ms: u64) {
    let frames = ms / FRAME.as_millis() as u64;
    for _ in 0..frames {
        app.update();
    }
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

pub fn hazards(app: &mut App, kind: HazardKind) -> Vec<Entity> {
    app.world_mut()
        .query::<(Entity, &Hazard)>()
        .iter(app.world())
        .filter(|(_, h)| h.kind == kind)
        .map(|(e, _)| e)
        .collect()
}
