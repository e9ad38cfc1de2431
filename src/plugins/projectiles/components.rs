use bevy::prelude::*;

use crate::plugins::player::PlayerSlot;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub shooter: PlayerSlot,
}

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);
