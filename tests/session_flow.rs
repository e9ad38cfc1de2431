mod common;

use arcade_shooter::common::state::GameState;
use arcade_shooter::plugins::hazards::HazardKind;
use arcade_shooter::plugins::player::{Player, PlayerSlot};
use arcade_shooter::plugins::score::Score;
use avian2d::prelude::*;
use bevy::prelude::*;

fn player_one(app: &mut App) -> Entity {
    app.world_mut()
        .query::<(Entity, &Player)>()
        .iter(app.world())
        .find(|(_, p)| p.slot == PlayerSlot::One)
        .map(|(e, _)| e)
        .expect("Player One exists while playing")
}

#[test]
fn start_spawn_collide_game_over() {
    let mut app = common::app_with(common::safe_tunables());
    common::start_game(&mut app);

    common::advance(&mut app, 1000);
    assert_eq!(common::state(&app), GameState::Playing);
    assert_eq!(common::hazards(&mut app, HazardKind::Obstacle).len(), 1);
    assert!(common::hazards(&mut app, HazardKind::Enemy).is_empty());

    common::advance(&mut app, 2000);
    let enemies = common::hazards(&mut app, HazardKind::Enemy);
    assert_eq!(enemies.len(), 1);
    assert_eq!(common::hazards(&mut app, HazardKind::Obstacle).len(), 3);
    assert!(common::hazards(&mut app, HazardKind::Meteor).is_empty());

    let player = player_one(&mut app);
    let enemy = enemies[0];
    app.world_mut().write_message(CollisionStart {
        collider1: player,
        collider2: enemy,
        body1: Some(player),
        body2: Some(enemy),
    });

    // PostUpdate: contact -> signal. Last: signal -> NextState. Next frame: transition.
    app.update();
    app.update();
    assert_eq!(common::state(&app), GameState::GameOver);
}

#[test]
fn five_seconds_of_play_spawns_five_one_one() {
    let mut app = common::app_with(common::safe_tunables());
    common::start_game(&mut app);

    common::advance(&mut app, 5000);

    assert_eq!(common::state(&app), GameState::Playing);
    assert_eq!(common::hazards(&mut app, HazardKind::Obstacle).len(), 5);
    assert_eq!(common::hazards(&mut app, HazardKind::Meteor).len(), 1);
    assert_eq!(common::hazards(&mut app, HazardKind::Enemy).len(), 1);
}

#[test]
fn nothing_spawns_after_game_over() {
    let mut app = common::app_with(common::safe_tunables());
    common::start_game(&mut app);
    common::advance(&mut app, 1000);

    let player = player_one(&mut app);
    let obstacle = common::hazards(&mut app, HazardKind::Obstacle)[0];
    app.world_mut().write_message(CollisionStart {
        collider1: obstacle,
        collider2: player,
        body1: None,
        body2: None,
    });
    app.update();
    app.update();
    assert_eq!(common::state(&app), GameState::GameOver);

    common::advance(&mut app, 5000);

    let remaining = app.world_mut().query::<&arcade_shooter::plugins::hazards::Hazard>().iter(app.world()).count();
    assert_eq!(remaining, 0, "scene teardown removed hazards and timers stay stopped");
    assert_eq!(common::state(&app), GameState::GameOver, "game over is terminal");
    assert_eq!(app.world().resource::<Score>().value(), 0);
}

#[test]
fn wasd_deploys_exactly_one_second_player() {
    let mut app = common::app_with(common::safe_tunables());
    common::start_game(&mut app);
    app.update();

    for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release_all();
            keys.clear();
            keys.press(key);
        }
        app.update();
    }

    let twos = app
        .world_mut()
        .query::<&Player>()
        .iter(app.world())
        .filter(|p| p.slot == PlayerSlot::Two)
        .count();
    assert_eq!(twos, 1);
}
