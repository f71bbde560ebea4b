use log::info;
use std::time::Duration;

mod collision;
mod config;
mod enemy;
mod entity;
mod game;
mod input_system;
mod math;
mod player;
mod renderer;
mod sdl_renderer;

use config::EngineConfig;
use entity::Entity;
use game::GameWorld;
use renderer::Renderer;
use sdl_renderer::Sdl2Renderer;

fn main() -> Result<(), String> {
    env_logger::init();

    let config = EngineConfig::load_or_default();

    let mut renderer = Sdl2Renderer::new(
        config.window_width,
        config.window_height,
        &config.window_title,
    )?;

    let mut world = GameWorld::new();
    world.initialize(&config)?;

    info!("Engine running...");

    'running: loop {
        renderer.poll_events();
        if renderer.should_close() || !world.is_running() {
            break 'running;
        }

        // Input collaborator: keyboard -> player movement direction
        let direction = {
            let keyboard_state = renderer.keyboard_state();
            input_system::movement_direction(&keyboard_state)
        };
        world.player_move(direction);

        // Enemies chase the center of the player's bounding box
        let player_center = world.player().map(|p| p.position() + p.size() * 0.5);
        if let Some(player_center) = player_center {
            world.set_enemy_targets(player_center);
        }

        world.run_ticks(1, config.fixed_timestep, &mut renderer)?;

        // Cap framerate to ~60 FPS
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    world.shutdown();

    Ok(())
}
