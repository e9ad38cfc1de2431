//! Spawn schedule: three independent repeating timers.
//!
//! A single large `tick` still reports every period it crossed, so frame hitches
//! don't lose spawns.

use std::time::Duration;

use bevy::prelude::*;

use super::factory::HazardKind;
use crate::common::tunables::Tunables;

#[derive(Resource, Debug, Clone)]
pub struct SpawnSchedule {
    timers: [(HazardKind, Timer); 3],
}

impl SpawnSchedule {
    pub fn new(obstacle: Duration, meteor: Duration, enemy: Duration) -> Self {
        Self {
            timers: [
                (HazardKind::Obstacle, Timer::new(obstacle, TimerMode::Repeating)),
                (HazardKind::Meteor, Timer::new(meteor, TimerMode::Repeating)),
                (HazardKind::Enemy, Timer::new(enemy, TimerMode::Repeating)),
            ],
        }
    }

    pub fn from_tunables(t: &Tunables) -> Self {
        Self::new(t.obstacle_interval(), t.meteor_interval(), t.enemy_interval())
    }

    pub fn interval(&self, kind: HazardKind) -> Duration {
        self.timers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, t)| t.duration())
            .unwrap_or_default()
    }

    /// Advance every timer by `delta` and yield one kind per completed period,
    /// obstacles first, then meteors, then enemies.
    pub fn tick(&mut self, delta: Duration) -> impl Iterator<Item = HazardKind> + '_ {
        for (_, timer) in &mut self.timers {
            timer.tick(delta);
        }
        self.timers
            .iter()
            .flat_map(|(kind, timer)| std::iter::repeat_n(*kind, timer.times_finished_this_tick() as usize))
    }
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        Self::from_tunables(&Tunables::default())
    }
}
