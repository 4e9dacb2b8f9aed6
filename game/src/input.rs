use glam::{Vec2, vec2};
use macroquad::prelude::{
    KeyCode, MouseButton, TouchPhase, is_key_pressed, is_mouse_button_pressed,
    is_mouse_button_released, mouse_position, touches,
};

use common::grid::Direction;
use common::intent::{self, Intent};

use crate::ui::Button;

/// Pairs gesture start and end points across frames. Touches and mouse
/// drags feed the same tracker.
pub struct SwipeTracker {
    anchor: Option<Vec2>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    pub fn begin(&mut self, point: Vec2) {
        self.anchor = Some(point);
    }

    pub fn end(&mut self, point: Vec2) -> Option<Direction> {
        let anchor = self.anchor.take()?;
        intent::swipe_direction(anchor, point)
    }
}

/// Collects this frame's intents from every input surface: arrow keys,
/// whichever buttons are on screen, and completed swipes. A press that
/// lands on a button is a click; anywhere else it anchors a swipe, so a
/// released button click (tiny displacement) never doubles as one.
pub fn poll_intents(buttons: &[Button], swipe: &mut SwipeTracker) -> Vec<Intent> {
    let mut intents = Vec::new();

    if let Some(direction) = arrow_key_pressed() {
        intents.push(Intent::Move(direction));
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let point = mouse_point();
        match buttons.iter().find(|button| button.contains(point)) {
            Some(button) => intents.push(button.intent),
            None => swipe.begin(point),
        }
    }

    if is_mouse_button_released(MouseButton::Left) {
        if let Some(direction) = swipe.end(mouse_point()) {
            intents.push(Intent::Move(direction));
        }
    }

    for touch in touches() {
        match touch.phase {
            TouchPhase::Started => swipe.begin(touch.position),
            TouchPhase::Ended => {
                if let Some(direction) = swipe.end(touch.position) {
                    intents.push(Intent::Move(direction));
                }
            }
            _ => {}
        }
    }

    intents
}

fn arrow_key_pressed() -> Option<Direction> {
    if is_key_pressed(KeyCode::Up) {
        Some(Direction::Up)
    } else if is_key_pressed(KeyCode::Down) {
        Some(Direction::Down)
    } else if is_key_pressed(KeyCode::Left) {
        Some(Direction::Left)
    } else if is_key_pressed(KeyCode::Right) {
        Some(Direction::Right)
    } else {
        None
    }
}

fn mouse_point() -> Vec2 {
    let (x, y) = mouse_position();
    vec2(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_full_drag_resolves_once() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(vec2(0.0, 0.0));
        assert_eq!(swipe.end(vec2(120.0, 0.0)), Some(Direction::Right));

        // The anchor was consumed.
        assert_eq!(swipe.end(vec2(240.0, 0.0)), None);
    }

    #[test]
    fn an_end_without_a_begin_is_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.end(vec2(500.0, 500.0)), None);
    }

    #[test]
    fn short_drags_resolve_to_nothing() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(vec2(100.0, 100.0));
        assert_eq!(swipe.end(vec2(110.0, 108.0)), None);
    }

    #[test]
    fn a_new_anchor_replaces_a_stale_one() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(vec2(0.0, 0.0));
        swipe.begin(vec2(300.0, 300.0));
        assert_eq!(swipe.end(vec2(300.0, 200.0)), Some(Direction::Up));
    }
}
