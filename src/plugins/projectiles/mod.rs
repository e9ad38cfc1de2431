//! Projectiles plugin: **message-based producer → consumer** bullet spawning.
//!
//! # Data flow
//! ```text
//!   Update (Playing)
//!┌────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: request_player_bullets                              │
//!│      - reads: ButtonInput<KeyCode>, Player + ControlScheme         │
//!│      - writes: FireRequest message                                 │
//!│                                                                    │
//!│  (B) Consumer: spawn_bullets                                       │
//!│      - reads: FireRequest messages                                 │
//!│      - spawns: Bullet entities (dynamic, collision events on)      │
//!└────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate: bullet_lifetime
//!   PostUpdate (Playing)
//!┌────────────────────────────────────────────────────────────────────┐
//!│  (C) process_bullet_hits                                           │
//!│      - reads: CollisionStart messages (avian)                      │
//!│      - despawns: bullet + hazard                                   │
//!│      - writes: HazardDestroyed message (scored by plugins::score)  │
//!└────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never spawn. Only the consumer creates bullet entities, so input
//! handling and entity layout stay independent.

pub mod collision;
pub mod components;
pub mod messages;
pub mod request;
pub mod spawn;

use bevy::prelude::*;

use crate::common::state::GameState;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::FireRequest>()
            .add_message::<messages::HazardDestroyed>();

        app.add_systems(
            Update,
            (
                request::request_player_bullets,
                spawn::spawn_bullets.after(request::request_player_bullets),
            )
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            FixedUpdate,
            spawn::bullet_lifetime.run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            PostUpdate,
            collision::process_bullet_hits.run_if(in_state(GameState::Playing)),
        );
    }
}
