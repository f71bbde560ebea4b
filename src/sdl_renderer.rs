//! SDL2 render backend
//!
//! The concrete `Renderer` implementation: owns the window, canvas and event
//! pump. Everything SDL-specific lives here; the engine core only ever sees
//! `&mut dyn Renderer`.

use crate::math::{Rectangle, Vector2};
use crate::renderer::Renderer;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND_COLOR: Color = Color::RGB(24, 24, 32);

pub struct Sdl2Renderer {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    quit_requested: bool,
}

impl Sdl2Renderer {
    /// Initializes SDL, opens a centered window and creates its canvas.
    pub fn new(width: u32, height: u32, title: &str) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let event_pump = sdl_context.event_pump()?;

        Ok(Sdl2Renderer {
            canvas,
            event_pump,
            quit_requested: false,
        })
    }

    /// Snapshot of the keyboard for the input layer.
    ///
    /// Deliberately not part of the `Renderer` trait: only the bootstrap
    /// loop, which owns the concrete backend, reads input. The core never
    /// sees it.
    pub fn keyboard_state(&self) -> KeyboardState<'_> {
        self.event_pump.keyboard_state()
    }
}

impl Renderer for Sdl2Renderer {
    fn begin_frame(&mut self) {
        self.canvas.set_draw_color(BACKGROUND_COLOR);
        self.canvas.clear();
    }

    fn end_frame(&mut self) {
        self.canvas.present();
    }

    fn draw_rectangle(&mut self, rect: &Rectangle, color: Color) -> Result<(), String> {
        let dest = Rect::new(
            rect.x as i32,
            rect.y as i32,
            rect.width as u32,
            rect.height as u32,
        );

        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(dest).map_err(|e| e.to_string())
    }

    fn draw_circle(&mut self, center: Vector2, radius: f32, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);

        // Scanline fill: one horizontal span per pixel row of the circle
        let cx = center.x as i32;
        let cy = center.y as i32;
        let r = radius.max(0.0) as i32;

        for dy in -r..=r {
            let half_width = (((r * r - dy * dy) as f32).sqrt()) as i32;
            self.canvas
                .draw_line((cx - half_width, cy + dy), (cx + half_width, cy + dy))
                .map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    fn should_close(&self) -> bool {
        self.quit_requested
    }

    fn poll_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.quit_requested = true;
                }
                _ => {}
            }
        }
    }
}
