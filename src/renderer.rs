//! Render collaborator interface
//!
//! The engine core never talks to a graphics API directly. Everything it
//! wants on screen goes through the `Renderer` trait, and the concrete
//! backend (`sdl_renderer.rs`) is injected by `main`. This keeps the
//! update/collision core testable without a window: tests plug in a
//! recording implementation instead.

use crate::math::{Rectangle, Vector2};
use sdl2::pixels::Color;

/// The drawing surface the engine core renders into.
///
/// # Design Pattern: Injected Collaborator
///
/// Entities receive `&mut dyn Renderer` in their `render` methods and issue
/// zero or more draw calls between `begin_frame` and `end_frame`. They never
/// know whether the calls hit an SDL2 canvas or a test double.
///
/// Draw calls return `Result<(), String>` - the same error convention SDL2's
/// canvas methods use, so the backend can forward errors without wrapping.
pub trait Renderer {
    /// Prepares a new frame (clear screen, reset state).
    fn begin_frame(&mut self);

    /// Finishes the current frame (present/swap buffers).
    fn end_frame(&mut self);

    /// Draws a filled axis-aligned rectangle.
    fn draw_rectangle(&mut self, rect: &Rectangle, color: Color) -> Result<(), String>;

    /// Draws a filled circle.
    fn draw_circle(&mut self, center: Vector2, radius: f32, color: Color) -> Result<(), String>;

    /// Whether the user asked to close the window.
    fn should_close(&self) -> bool;

    /// Pumps the backend's event queue. Called once per frame by the
    /// bootstrap loop, before input is read.
    fn poll_events(&mut self);
}
