use crate::math::Vector2;
use sdl2::keyboard::{KeyboardState, Scancode};

/// Input collaborator: turns the current keyboard state into a movement
/// direction for the player.
///
/// The engine core places no constraint on where directions come from; this
/// module is just the keyboard flavor of the collaborator. The returned
/// direction is raw (unnormalized) - `Player::move_toward` normalizes, so
/// diagonals don't move faster.
///
/// Input processing is split in two so the mapping logic stays testable:
/// reading scancodes needs a live SDL event pump, combining flags into a
/// direction does not.
pub fn movement_direction(keyboard_state: &KeyboardState) -> Vector2 {
    direction_from_flags(
        keyboard_state.is_scancode_pressed(Scancode::W)
            || keyboard_state.is_scancode_pressed(Scancode::Up),
        keyboard_state.is_scancode_pressed(Scancode::S)
            || keyboard_state.is_scancode_pressed(Scancode::Down),
        keyboard_state.is_scancode_pressed(Scancode::A)
            || keyboard_state.is_scancode_pressed(Scancode::Left),
        keyboard_state.is_scancode_pressed(Scancode::D)
            || keyboard_state.is_scancode_pressed(Scancode::Right),
    )
}

/// Combines per-axis key flags into a direction vector. Opposing keys cancel
/// out; no keys pressed means the zero vector, which stops the player.
pub fn direction_from_flags(up: bool, down: bool, left: bool, right: bool) -> Vector2 {
    let mut direction = Vector2::ZERO;

    if up {
        direction.y -= 1.0;
    }
    if down {
        direction.y += 1.0;
    }
    if left {
        direction.x -= 1.0;
    }
    if right {
        direction.x += 1.0;
    }

    direction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_is_zero_direction() {
        assert_eq!(direction_from_flags(false, false, false, false), Vector2::ZERO);
    }

    #[test]
    fn test_single_axis_directions() {
        assert_eq!(direction_from_flags(true, false, false, false), Vector2::new(0.0, -1.0));
        assert_eq!(direction_from_flags(false, true, false, false), Vector2::new(0.0, 1.0));
        assert_eq!(direction_from_flags(false, false, true, false), Vector2::new(-1.0, 0.0));
        assert_eq!(direction_from_flags(false, false, false, true), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        assert_eq!(direction_from_flags(true, true, false, false), Vector2::ZERO);
        assert_eq!(direction_from_flags(false, false, true, true), Vector2::ZERO);
    }

    #[test]
    fn test_diagonal_combines_both_axes() {
        assert_eq!(direction_from_flags(true, false, false, true), Vector2::new(1.0, -1.0));
    }
}
