use crate::entity::Entity;
use crate::math::Vector2;
use crate::renderer::Renderer;
use sdl2::pixels::Color;
use std::any::Any;

/// Movement speed in world units per second.
const PLAYER_SPEED: f32 = 200.0;

/// Bounding-box size in world units.
const PLAYER_SIZE: Vector2 = Vector2 { x: 50.0, y: 50.0 };

const PLAYER_COLOR: Color = Color::RGB(96, 160, 255);

/// The player-controlled entity.
///
/// The player has no behavior of its own: it keeps whatever velocity the last
/// `move_toward` call gave it and integrates that velocity every tick. Input
/// handling lives outside the core (see `input_system.rs`) and drives the
/// player exclusively through `move_toward`.
pub struct Player {
    name: String,
    position: Vector2,
    size: Vector2,
    velocity: Vector2,
    speed: f32,
}

impl Player {
    pub fn new(position: Vector2) -> Self {
        Player {
            name: "Player".to_string(),
            position,
            size: PLAYER_SIZE,
            velocity: Vector2::ZERO,
            speed: PLAYER_SPEED,
        }
    }

    /// Points the player in `direction`.
    ///
    /// Sets `velocity = normalize(direction) * speed`. Nothing moves until
    /// the next `update` - this only stores the intent. A zero direction
    /// stops the player, since the zero vector normalizes to itself.
    pub fn move_toward(&mut self, direction: Vector2) {
        self.velocity = direction.normalize() * self.speed;
    }
}

impl Entity for Player {
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
        // Velocity persists across ticks; only move_toward changes it
        self.position = self.position + self.velocity * delta_time;
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.draw_rectangle(&self.bounds(), PLAYER_COLOR)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
