//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use std::path::Path;

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::common::tunables::{ConfigError, Tunables, tunables_path};
use crate::plugins;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    // Loaded before DefaultPlugins so the window can be sized from it.
    // The outcome is logged once LogPlugin is up.
    let path = tunables_path();
    let loaded = Tunables::load(&path);
    let tunables = loaded.as_ref().cloned().unwrap_or_default();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Arcade Shooter".into(),
            resolution: WindowResolution::new(
                tunables.screen_width as u32,
                tunables.screen_height as u32,
            ),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    report_tunables(&path, &loaded);
    app.insert_resource(tunables);

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (Firefly/camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}

fn report_tunables(path: &Path, loaded: &Result<Tunables, ConfigError>) {
    match loaded {
        Ok(_) => info!("Loaded tunables from {}", path.display()),
        Err(e) if e.is_not_found() => warn!("No {}; using default tunables", path.display()),
        Err(e) => error!("{e}; using default tunables"),
    }
}
