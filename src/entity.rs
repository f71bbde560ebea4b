//! Entity abstraction
//!
//! Every object that lives in the world - the player, the enemies - is an
//! `Entity`: something with a name, a position, a size, a velocity, a
//! per-tick `update`, and a `render` into the injected renderer.
//!
//! # Design Pattern: Trait-based Polymorphism
//!
//! The world stores `Box<dyn Entity>` and drives all of them through this
//! trait; nothing in the update/collision/render loop ever matches on the
//! concrete type. The only place a concrete type matters is the world's
//! player accessor, which goes through `as_any` rather than widening this
//! trait with player-specific methods.

use crate::math::{Rectangle, Vector2};
use crate::renderer::Renderer;
use std::any::Any;

pub trait Entity {
    /// The entity's display name, fixed at construction.
    fn name(&self) -> &str;

    /// Current position (top-left corner of the bounding box).
    fn position(&self) -> Vector2;

    /// Bounding-box size, fixed at construction.
    fn size(&self) -> Vector2;

    /// Current velocity in units per second.
    fn velocity(&self) -> Vector2;

    /// Advances the entity by `delta_time` seconds.
    ///
    /// Each variant decides its own movement rule here; see `player.rs` and
    /// `enemy.rs`. `delta_time` is never negative.
    fn update(&mut self, delta_time: f32);

    /// Draws the entity. Must not mutate entity state - rendering is a pure
    /// side effect into the collaborator, which `&self` enforces.
    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String>;

    /// Escape hatch for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of `as_any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The entity's axis-aligned bounding box, derived from position + size.
    fn bounds(&self) -> Rectangle {
        let position = self.position();
        let size = self.size();
        Rectangle::new(position.x, position.y, size.x, size.y)
    }

    /// AABB overlap test against another entity.
    ///
    /// Symmetric: `a.collides_with(b)` and `b.collides_with(a)` always agree,
    /// because both reduce to the same rectangle intersection.
    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}
