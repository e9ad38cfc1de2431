//! UI plugin: intro screen, in-game HUD, game-over screen.
//!
//! Each screen is a UI tree scoped to its state, so leaving the state tears it down.

use bevy::prelude::*;

pub mod game_over;
pub mod hud;
pub mod intro;

pub fn plugin(app: &mut App) {
    intro::plugin(app);
    hud::plugin(app);
    game_over::plugin(app);
}

/// Full-screen column that centers its children.
pub(crate) fn centered_column() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        row_gap: Val::Px(24.0),
        ..default()
    }
}

pub(crate) fn label(text: impl Into<String>, size: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

#[cfg(test)]
mod tests;
