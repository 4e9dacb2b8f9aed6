use glam::Vec2;

use crate::grid::Direction;

/// Minimum distance for a swipe to be considered.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Everything the player can ask of the game, whichever input surface
/// (keyboard, button, gesture) delivered it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Intent {
    Move(Direction),
    /// Start over with a fresh maze and fresh state.
    Start,
    /// After a loss: same maze, fresh attempt.
    Restart,
    /// After a win: fresh maze, fresh state.
    PlayAgain,
}

/// Resolves a completed gesture to a direction. The longer axis of the
/// displacement decides horizontal versus vertical (ties go vertical), and
/// anything at or below `SWIPE_THRESHOLD` on the winning axis is not a
/// swipe.
pub fn swipe_direction(start: Vec2, end: Vec2) -> Option<Direction> {
    let diff = end - start;

    if diff.x.abs() > diff.y.abs() {
        if diff.x.abs() > SWIPE_THRESHOLD {
            Some(if diff.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else {
            None
        }
    } else if diff.y.abs() > SWIPE_THRESHOLD {
        Some(if diff.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;

    #[test]
    fn long_horizontal_drags_resolve_left_and_right() {
        let origin = vec2(100.0, 100.0);
        assert_eq!(
            swipe_direction(origin, vec2(180.0, 110.0)),
            Some(Direction::Right)
        );
        assert_eq!(
            swipe_direction(origin, vec2(20.0, 90.0)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn long_vertical_drags_resolve_up_and_down() {
        let origin = vec2(100.0, 100.0);
        assert_eq!(
            swipe_direction(origin, vec2(110.0, 200.0)),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(origin, vec2(90.0, 10.0)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn short_drags_are_not_swipes() {
        let origin = vec2(100.0, 100.0);
        assert_eq!(swipe_direction(origin, vec2(149.0, 100.0)), None);
        assert_eq!(swipe_direction(origin, vec2(100.0, 149.0)), None);
        assert_eq!(swipe_direction(origin, origin), None);
    }

    #[test]
    fn the_dominant_axis_decides() {
        let origin = vec2(0.0, 0.0);
        assert_eq!(
            swipe_direction(origin, vec2(80.0, 60.0)),
            Some(Direction::Right)
        );
        assert_eq!(
            swipe_direction(origin, vec2(60.0, -80.0)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn a_perfect_diagonal_falls_to_the_vertical_branch() {
        assert_eq!(
            swipe_direction(vec2(0.0, 0.0), vec2(60.0, 60.0)),
            Some(Direction::Down)
        );
    }
}
