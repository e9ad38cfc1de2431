//! Buffered projectile messages.
//!
//! We use Bevy **Messages** here instead of spawning straight from input handling.
//! The key idea is separation of concerns:
//! - producers create *intent*
//! - consumer applies intent (entity spawn / score updates)
//!
//! This is a producer → queue → consumer pipeline.

use bevy::prelude::*;

use crate::plugins::hazards::HazardKind;
use crate::plugins::player::PlayerSlot;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct FireRequest {
    pub shooter: PlayerSlot,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A player's bullet destroyed a hazard.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardDestroyed {
    pub kind: HazardKind,
    pub by: PlayerSlot,
}
