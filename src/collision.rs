//! Collision detection for Engine1
//!
//! This module provides the all-pairs AABB (Axis-Aligned Bounding Box)
//! collision scan the world runs once per tick, and the event type it emits.
//!
//! # Architecture
//!
//! - `CollisionEvent`: which two entities overlapped this tick
//! - `find_collisions`: pure function over the world's entity collection
//!
//! Detection only - there is no response or push-apart here. The scan is
//! `O(n²)` over unordered pairs, with no spatial acceleration structure;
//! entity counts in this engine are far too small for that to matter.

use crate::entity::Entity;

/// A single detected overlap, identified by the two entity names.
///
/// `first` always comes from the entity earlier in collection order, so the
/// same physical overlap produces the same event on every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    pub first: String,
    pub second: String,
}

/// Scans every unordered entity pair for bounding-box overlap.
///
/// Pairs are enumerated as `(i, j)` with `i < j` in collection order, and
/// each pair is tested exactly once per call. Pairs that merely touch along
/// an edge do not collide (see `Rectangle::intersects`).
///
/// # Returns
///
/// One `CollisionEvent` per intersecting pair, in enumeration order.
pub fn find_collisions(entities: &[Box<dyn Entity>]) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            if entities[i].collides_with(entities[j].as_ref()) {
                events.push(CollisionEvent {
                    first: entities[i].name().to_string(),
                    second: entities[j].name().to_string(),
                });
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;
    use crate::renderer::Renderer;
    use std::any::Any;

    /// Minimal entity with a configurable bounding box. The real entity
    /// types have fixed sizes, which makes the geometry cases below awkward
    /// to set up.
    struct TestEntity {
        name: String,
        position: Vector2,
        size: Vector2,
    }

    impl TestEntity {
        fn boxed(name: &str, x: f32, y: f32, w: f32, h: f32) -> Box<dyn Entity> {
            Box::new(TestEntity {
                name: name.to_string(),
                position: Vector2::new(x, y),
                size: Vector2::new(w, h),
            })
        }
    }

    impl Entity for TestEntity {
        fn name(&self) -> &str {
            &self.name
        }

        fn position(&self) -> Vector2 {
            self.position
        }

        fn size(&self) -> Vector2 {
            self.size
        }

        fn velocity(&self) -> Vector2 {
            Vector2::ZERO
        }

        fn update(&mut self, _delta_time: f32) {}

        fn render(&self, _renderer: &mut dyn Renderer) -> Result<(), String> {
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_overlapping_pair_emits_one_event() {
        let entities = vec![
            TestEntity::boxed("a", 0.0, 0.0, 10.0, 10.0),
            TestEntity::boxed("b", 5.0, 5.0, 10.0, 10.0),
        ];

        let events = find_collisions(&entities);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].first, "a");
        assert_eq!(events[0].second, "b");
    }

    #[test]
    fn test_non_overlapping_third_entity_adds_no_pairs() {
        let entities = vec![
            TestEntity::boxed("a", 0.0, 0.0, 10.0, 10.0),
            TestEntity::boxed("b", 5.0, 5.0, 10.0, 10.0),
            TestEntity::boxed("c", 200.0, 200.0, 10.0, 10.0),
        ];

        let events = find_collisions(&entities);

        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_edge_touching_pair_is_not_reported() {
        let entities = vec![
            TestEntity::boxed("a", 0.0, 0.0, 10.0, 10.0),
            TestEntity::boxed("b", 10.0, 0.0, 10.0, 10.0),
        ];

        assert!(find_collisions(&entities).is_empty());
    }

    #[test]
    fn test_three_way_overlap_reports_each_pair_once() {
        // All three stacked on the same spot: pairs (a,b), (a,c), (b,c)
        let entities = vec![
            TestEntity::boxed("a", 0.0, 0.0, 10.0, 10.0),
            TestEntity::boxed("b", 1.0, 1.0, 10.0, 10.0),
            TestEntity::boxed("c", 2.0, 2.0, 10.0, 10.0),
        ];

        let events = find_collisions(&entities);

        assert_eq!(events.len(), 3);
        assert_eq!(
            events,
            vec![
                CollisionEvent {
                    first: "a".to_string(),
                    second: "b".to_string(),
                },
                CollisionEvent {
                    first: "a".to_string(),
                    second: "c".to_string(),
                },
                CollisionEvent {
                    first: "b".to_string(),
                    second: "c".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_and_single_entity_collections() {
        assert!(find_collisions(&[]).is_empty());

        let one = vec![TestEntity::boxed("only", 0.0, 0.0, 10.0, 10.0)];
        assert!(find_collisions(&one).is_empty());
    }
}
