// GameWorld struct and entity management
//
// This module contains the GameWorld struct which owns all game entities and
// drives the tick cycle: update every entity, scan for collisions, render
// through the injected collaborator.

use crate::collision::{self, CollisionEvent};
use crate::config::EngineConfig;
use crate::enemy::Enemy;
use crate::entity::Entity;
use crate::math::{Rectangle, Vector2};
use crate::player::Player;
use crate::renderer::Renderer;
use log::{debug, info, trace, warn};

/// GameWorld owns every entity in the simulation.
///
/// The collection order is load-bearing: it is both the update order and the
/// collision pair-enumeration order, and it never changes between
/// `initialize` and `shutdown` (no spawn/despawn mid-run).
///
/// The player is entry 0 of the collection; `player_index` is a non-owning
/// back-reference into it, cleared on shutdown. Keeping an index instead of a
/// second handle means there is exactly one owner for every entity.
pub struct GameWorld {
    entities: Vec<Box<dyn Entity>>,
    player_index: Option<usize>,
    running: bool,
}

impl GameWorld {
    /// Creates an empty, not-yet-running world.
    pub fn new() -> Self {
        GameWorld {
            entities: Vec::new(),
            player_index: None,
            running: false,
        }
    }

    /// Builds the initial entity set: the player at its configured spawn,
    /// then one enemy per configured enemy spawn, in that order.
    ///
    /// All-or-nothing: entities are staged in a local collection and
    /// committed in one move, so a failure can never leave the world half
    /// constructed. Construction is currently infallible; the `Result` is
    /// the seam where resource-acquisition failures would surface.
    pub fn initialize(&mut self, config: &EngineConfig) -> Result<(), String> {
        let window = Rectangle::new(
            0.0,
            0.0,
            config.window_width as f32,
            config.window_height as f32,
        );

        let mut entities: Vec<Box<dyn Entity>> =
            Vec::with_capacity(1 + config.enemy_spawns.len());

        if !window.contains(config.player_spawn) {
            warn!(
                "Player spawn ({}, {}) is outside the window",
                config.player_spawn.x, config.player_spawn.y
            );
        }
        entities.push(Box::new(Player::new(config.player_spawn)));

        for spawn in &config.enemy_spawns {
            if !window.contains(*spawn) {
                warn!("Enemy spawn ({}, {}) is outside the window", spawn.x, spawn.y);
            }
            entities.push(Box::new(Enemy::new(*spawn)));
        }

        self.entities = entities;
        self.player_index = Some(0);
        self.running = true;

        info!("World initialized with {} entities", self.entities.len());
        Ok(())
    }

    /// Whether the world is between `initialize` and `shutdown`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Immutable view of the player, while the world is initialized.
    pub fn player(&self) -> Option<&Player> {
        self.player_index
            .and_then(|index| self.entities.get(index))
            .and_then(|entity| entity.as_any().downcast_ref::<Player>())
    }

    /// Forwards a movement direction to the player. This is the seam the
    /// input collaborator drives; a no-op on an uninitialized world.
    pub fn player_move(&mut self, direction: Vector2) {
        if let Some(index) = self.player_index {
            if let Some(player) = self
                .entities
                .get_mut(index)
                .and_then(|entity| entity.as_any_mut().downcast_mut::<Player>())
            {
                player.move_toward(direction);
            }
        }
    }

    /// Points every enemy at `target`. The bootstrap loop uses this to make
    /// enemies chase the player; any other targeting policy goes through the
    /// same seam.
    pub fn set_enemy_targets(&mut self, target: Vector2) {
        for entity in self.entities.iter_mut() {
            if let Some(enemy) = entity.as_any_mut().downcast_mut::<Enemy>() {
                enemy.set_target(target);
            }
        }
    }

    /// Runs one tick: update pass, collision pass, render pass, strictly in
    /// that order, each over the collection in insertion order.
    ///
    /// Returns the collision events detected this tick (also logged at debug
    /// level). Render errors abort the tick.
    pub fn tick(
        &mut self,
        delta_time: f32,
        renderer: &mut dyn Renderer,
    ) -> Result<Vec<CollisionEvent>, String> {
        // Update pass
        for entity in self.entities.iter_mut() {
            entity.update(delta_time);
            trace!(
                "{} at ({:.1}, {:.1}) velocity ({:.1}, {:.1})",
                entity.name(),
                entity.position().x,
                entity.position().y,
                entity.velocity().x,
                entity.velocity().y
            );
        }

        // Collision pass
        let events = collision::find_collisions(&self.entities);
        for event in &events {
            debug!("Collision detected between {} and {}", event.first, event.second);
        }

        // Render pass
        renderer.begin_frame();
        for entity in self.entities.iter() {
            entity.render(renderer)?;
        }
        renderer.end_frame();

        Ok(events)
    }

    /// Runs up to `ticks` ticks. The running flag is checked only at tick
    /// boundaries, so a shutdown takes effect before the next tick, never in
    /// the middle of one.
    pub fn run_ticks(
        &mut self,
        ticks: u32,
        delta_time: f32,
        renderer: &mut dyn Renderer,
    ) -> Result<(), String> {
        for _ in 0..ticks {
            if !self.running {
                break;
            }
            self.tick(delta_time, renderer)?;
        }
        Ok(())
    }

    /// Tears the world down: drops every entity, clears the player
    /// back-reference, stops the loop. Idempotent - shutting down an already
    /// empty world changes nothing.
    pub fn shutdown(&mut self) {
        info!("Shutting down world");
        self.entities.clear();
        self.player_index = None;
        self.running = false;
    }
}
