use bevy::prelude::*;

use crate::common::state::GameSignal;
use crate::common::test_utils::{drain_messages, ensure_messages, keys_pressed, run_system_once};
use crate::plugins::score::{Score, ScoreLabel};

use super::game_over::{self, FinalScoreLabel};
use super::hud;
use super::intro::{self, StartButton};

fn score_of(points: u64) -> Score {
    let mut score = Score::default();
    score.add(points);
    score
}

fn start_world() -> World {
    let mut world = World::new();
    world.insert_resource(ButtonInput::<KeyCode>::default());
    ensure_messages::<GameSignal>(&mut world);
    world
}

#[test]
fn intro_has_a_start_button() {
    let mut world = World::new();
    run_system_once(&mut world, intro::spawn_intro);

    assert_eq!(world.query::<&StartButton>().iter(&world).count(), 1);
}

#[test]
fn pressing_start_sends_start_signal() {
    let mut world = start_world();
    run_system_once(&mut world, intro::spawn_intro);

    let button = world.query_filtered::<Entity, With<StartButton>>().single(&world).unwrap();
    world.entity_mut(button).insert(Interaction::Pressed);

    run_system_once(&mut world, intro::start_on_press);

    assert_eq!(drain_messages::<GameSignal>(&mut world), vec![GameSignal::Start]);
}

#[test]
fn enter_key_also_starts() {
    let mut world = start_world();
    world.insert_resource(keys_pressed(&[KeyCode::Enter]));

    run_system_once(&mut world, intro::start_on_press);

    assert_eq!(drain_messages::<GameSignal>(&mut world), vec![GameSignal::Start]);
}

#[test]
fn idle_intro_sends_nothing() {
    let mut world = start_world();
    run_system_once(&mut world, intro::spawn_intro);

    run_system_once(&mut world, intro::start_on_press);

    assert!(drain_messages::<GameSignal>(&mut world).is_empty());
}

#[test]
fn hud_label_shows_current_score() {
    let mut world = World::new();
    world.insert_resource(score_of(300));

    run_system_once(&mut world, hud::spawn_score_label);

    let text = world.query_filtered::<&Text, With<ScoreLabel>>().single(&world).unwrap();
    assert_eq!(text.0, "Score: 300");
}

#[test]
fn game_over_shows_final_score() {
    let mut world = World::new();
    world.insert_resource(score_of(1200));

    run_system_once(&mut world, game_over::spawn_game_over);

    let text = world.query_filtered::<&Text, With<FinalScoreLabel>>().single(&world).unwrap();
    assert_eq!(text.0, "Final Score: 1200");

    let titles = world.query::<&Text>().iter(&world).filter(|t| t.0 == "Game Over").count();
    assert_eq!(titles, 1);
}
