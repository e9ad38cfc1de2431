//! Helpers for reading avian `CollisionStart` pairs.
//!
//! Avian reports colliders; gameplay components may sit on the rigid body instead.
//! [`CollisionTarget::gameplay_owner`] prefers the body when one is attached.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionTarget {
    pub collider: Entity,
    pub body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    pub fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
pub fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Orient a collision pair so that the side matching `is_a` comes first.
///
/// Returns `None` unless exactly one side matches.
#[inline]
pub fn oriented(
    ev: &CollisionStart,
    is_a: impl Fn(Entity) -> bool,
) -> Option<(CollisionTarget, CollisionTarget)> {
    let (t1, t2) = targets(ev);
    let a1 = is_a(t1.gameplay_owner());
    let a2 = is_a(t2.gameplay_owner());
    match (a1, a2) {
        (true, false) => Some((t1, t2)),
        (false, true) => Some((t2, t1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(world: &mut World) -> (Entity, Entity) {
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    #[test]
    fn gameplay_owner_prefers_body() {
        let mut world = World::new();
        let (collider, body) = pair(&mut world);

        let with_body = CollisionTarget { collider, body: Some(body) };
        let bare = CollisionTarget { collider, body: None };

        assert_eq!(with_body.gameplay_owner(), body);
        assert_eq!(bare.gameplay_owner(), collider);
    }

    #[test]
    fn oriented_puts_matching_side_first() {
        let mut world = World::new();
        let (a, b) = pair(&mut world);
        let ev = CollisionStart { collider1: b, collider2: a, body1: None, body2: None };

        let (first, second) = oriented(&ev, |e| e == a).expect("exactly one side matches");
        assert_eq!(first.collider, a);
        assert_eq!(second.collider, b);

        assert!(oriented(&ev, |_| true).is_none());
        assert!(oriented(&ev, |_| false).is_none());
    }
}
