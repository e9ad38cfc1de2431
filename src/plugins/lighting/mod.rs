//! Lighting plugin (Firefly) (render-only).
//!
//! Every ship carries its own light; hazards block it.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::plugins::hazards::Hazard;
use crate::plugins::player::Player;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(Update, (attach_player_lights, attach_hazard_occluders));
}

fn attach_player_lights(mut commands: Commands, q_new: Query<Entity, Added<Player>>) {
    for player in &q_new {
        commands.entity(player).with_child((
            Name::new("PlayerLight"),
            PointLight2d {
                color: Color::srgb(1.0, 0.9, 0.75),
                radius: 450.0,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
        ));
    }
}

fn attach_hazard_occluders(mut commands: Commands, q_new: Query<(Entity, &Hazard), Added<Hazard>>) {
    for (e, hazard) in &q_new {
        // Inscribed circle keeps box shadows inside the sprite.
        let radius = hazard.kind.size().min_element() * 0.5;
        commands.entity(e).try_insert(Occluder2d::circle(radius));
    }
}
