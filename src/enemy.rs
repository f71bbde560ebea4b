use crate::entity::Entity;
use crate::math::Vector2;
use crate::renderer::Renderer;
use sdl2::pixels::Color;
use std::any::Any;

/// Movement speed in world units per second.
const ENEMY_SPEED: f32 = 150.0;

/// Bounding-box size in world units.
const ENEMY_SIZE: Vector2 = Vector2 { x: 40.0, y: 40.0 };

/// Distance at which an enemy counts as having reached its target.
const ARRIVE_DISTANCE: f32 = 5.0;

const SEEKING_COLOR: Color = Color::RGB(220, 64, 64);
const ARRIVED_COLOR: Color = Color::RGB(128, 48, 48);

/// The two behavior states of an enemy.
///
/// There is no stored state machine: the state is a pure function of the
/// distance to the target, recomputed every tick (see `Enemy::behavior`).
/// An arrived enemy can only start seeking again if something outside moves
/// its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyBehavior {
    /// More than `ARRIVE_DISTANCE` from the target: move toward it at full
    /// speed.
    Seeking,
    /// Within `ARRIVE_DISTANCE` of the target: stand still.
    Arrived,
}

/// A target-seeking entity.
///
/// Enemies spawn with their target set to their own spawn point, so a fresh
/// enemy stands still until `set_target` gives it somewhere to go.
pub struct Enemy {
    name: String,
    position: Vector2,
    size: Vector2,
    velocity: Vector2,
    speed: f32,
    target: Vector2,
}

impl Enemy {
    pub fn new(position: Vector2) -> Self {
        Enemy {
            name: "Enemy".to_string(),
            position,
            size: ENEMY_SIZE,
            velocity: Vector2::ZERO,
            speed: ENEMY_SPEED,
            target: position,
        }
    }

    /// Retargets the enemy. Takes effect on the next `update`.
    pub fn set_target(&mut self, target: Vector2) {
        self.target = target;
    }

    /// The behavior state for the current tick, derived from the distance to
    /// the target. No hysteresis: crossing the threshold flips the state
    /// immediately, in either direction.
    pub fn behavior(&self) -> EnemyBehavior {
        let direction = self.target - self.position;
        if direction.magnitude() > ARRIVE_DISTANCE {
            EnemyBehavior::Seeking
        } else {
            EnemyBehavior::Arrived
        }
    }
}

impl Entity for Enemy {
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
        self.velocity
    }

    fn update(&mut self, delta_time: f32) {
        match self.behavior() {
            EnemyBehavior::Seeking => {
                let direction = self.target - self.position;
                self.velocity = direction.normalize() * self.speed;
                self.position = self.position + self.velocity * delta_time;
            }
            EnemyBehavior::Arrived => {
                // Close enough - stop, and stay put until retargeted
                self.velocity = Vector2::ZERO;
            }
        }
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        let color = match self.behavior() {
            EnemyBehavior::Seeking => SEEKING_COLOR,
            EnemyBehavior::Arrived => ARRIVED_COLOR,
        };
        let center = self.position + self.size * 0.5;
        renderer.draw_circle(center, self.size.x / 2.0, color)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
