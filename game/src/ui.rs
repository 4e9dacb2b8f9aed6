use macroquad::prelude::*;

use common::grid::Direction;
use common::intent::Intent;

use crate::env::GridConfig;
use crate::render::{CELL_SIZE, MARGIN};

/// Vertical space reserved under the maze for the score line and buttons.
pub const CONTROLS_HEIGHT: f32 = 150.0;

const FONT_SIZE: f32 = 24.0;
const TITLE_FONT_SIZE: f32 = 48.0;

const TEXT_COLOR: Color = WHITE;
const SCORE_COLOR: Color = LIGHTGRAY;
const BUTTON_COLOR: Color = DARKGRAY;
const BUTTON_LABEL_COLOR: Color = WHITE;
const BOX_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.85,
};
const BOX_BORDER_COLOR: Color = GREEN;

const ARROW_BUTTON_SIZE: f32 = 44.0;
const ARROW_BUTTON_GAP: f32 = 6.0;
const START_BUTTON_WIDTH: f32 = 96.0;
const BUTTON_HEIGHT: f32 = 40.0;
const BLINK_PERIOD: f64 = 1.0; // Seconds for one on/off cycle.

#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub intent: Intent,
}

impl Button {
    pub fn new(rect: Rect, label: &'static str, intent: Intent) -> Self {
        Self {
            rect,
            label,
            intent,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    pub fn draw(&self) {
        draw_rectangle(
            self.rect.x,
            self.rect.y,
            self.rect.w,
            self.rect.h,
            BUTTON_COLOR,
        );
        let size = measure_text(self.label, None, FONT_SIZE as u16, 1.0);
        draw_text(
            self.label,
            self.rect.x + (self.rect.w - size.width) / 2.0,
            self.rect.y + (self.rect.h + size.height) / 2.0,
            FONT_SIZE,
            BUTTON_LABEL_COLOR,
        );
    }
}

/// The always-present controls: the start button and the arrow pad.
pub struct Controls {
    pub start: Button,
    pub arrows: [Button; 4],
    score_pos: Vec2,
}

impl Controls {
    /// Lays the pad out under the maze: Up centered on the first row,
    /// Left/Down/Right on the second, Start against the left margin.
    pub fn layout(config: &GridConfig) -> Self {
        let maze_w = config.cols as f32 * CELL_SIZE;
        let pad_top = MARGIN + config.rows as f32 * CELL_SIZE + MARGIN;
        let center_x = MARGIN + maze_w / 2.0;

        let size = ARROW_BUTTON_SIZE;
        let step = size + ARROW_BUTTON_GAP;
        let first_col = center_x - size / 2.0;

        let up = Rect::new(first_col, pad_top, size, size);
        let left = Rect::new(first_col - step, pad_top + step, size, size);
        let down = Rect::new(first_col, pad_top + step, size, size);
        let right = Rect::new(first_col + step, pad_top + step, size, size);

        let start = Rect::new(
            MARGIN,
            pad_top + step + (size - BUTTON_HEIGHT) / 2.0,
            START_BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        Self {
            start: Button::new(start, "Start", Intent::Start),
            arrows: [
                Button::new(up, "^", Intent::Move(Direction::Up)),
                Button::new(right, ">", Intent::Move(Direction::Right)),
                Button::new(down, "v", Intent::Move(Direction::Down)),
                Button::new(left, "<", Intent::Move(Direction::Left)),
            ],
            score_pos: vec2(MARGIN, pad_top + FONT_SIZE),
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        std::iter::once(&self.start).chain(self.arrows.iter())
    }

    /// The start button blinks until it has been pressed once: half the
    /// period on, half off.
    pub fn draw_start(&self, blinking: bool) {
        if blinking && get_time() % BLINK_PERIOD >= BLINK_PERIOD / 2.0 {
            return;
        }
        self.start.draw();
    }

    pub fn draw_score(&self, score: u32) {
        draw_text(
            &format!("Moves: {}", score),
            self.score_pos.x,
            self.score_pos.y,
            FONT_SIZE,
            SCORE_COLOR,
        );
    }
}

/// A modal overlay with a few centered lines and one button.
pub struct MessageBox {
    pub rect: Rect,
    pub lines: Vec<String>,
    pub button: Button,
}

/// Shown when the player doubles back. Restart keeps the maze.
pub fn lost_box(screen_w: f32, screen_h: f32) -> MessageBox {
    message_box(
        screen_w,
        screen_h,
        vec![
            "You crossed your own path.".to_string(),
            "Press restart.".to_string(),
        ],
        "Restart",
        Intent::Restart,
    )
}

/// Shown on a win. Play again gets a brand new maze.
pub fn won_box(score: u32, screen_w: f32, screen_h: f32) -> MessageBox {
    message_box(
        screen_w,
        screen_h,
        vec!["You Won!".to_string(), format!("Moves: {}", score)],
        "Play Again",
        Intent::PlayAgain,
    )
}

fn message_box(
    screen_w: f32,
    screen_h: f32,
    lines: Vec<String>,
    label: &'static str,
    intent: Intent,
) -> MessageBox {
    let w = 300.0;
    let h = 90.0 + lines.len() as f32 * (FONT_SIZE + 8.0);
    let rect = Rect::new((screen_w - w) / 2.0, (screen_h - h) / 2.0, w, h);

    let button_w = 140.0;
    let button = Button::new(
        Rect::new(
            rect.x + (w - button_w) / 2.0,
            rect.y + h - BUTTON_HEIGHT - 14.0,
            button_w,
            BUTTON_HEIGHT,
        ),
        label,
        intent,
    );

    MessageBox {
        rect,
        lines,
        button,
    }
}

impl MessageBox {
    pub fn draw(&self) {
        draw_rectangle(self.rect.x, self.rect.y, self.rect.w, self.rect.h, BOX_COLOR);
        draw_rectangle_lines(
            self.rect.x,
            self.rect.y,
            self.rect.w,
            self.rect.h,
            2.0,
            BOX_BORDER_COLOR,
        );

        let mut baseline = self.rect.y + 14.0 + FONT_SIZE;
        for line in &self.lines {
            let size = measure_text(line, None, FONT_SIZE as u16, 1.0);
            draw_text(
                line,
                self.rect.x + (self.rect.w - size.width) / 2.0,
                baseline,
                FONT_SIZE,
                TEXT_COLOR,
            );
            baseline += FONT_SIZE + 8.0;
        }

        self.button.draw();
    }
}

pub fn draw_title(screen_w: f32) {
    let title = "One Way Out";
    let size = measure_text(title, None, TITLE_FONT_SIZE as u16, 1.0);
    draw_text(
        title,
        (screen_w - size.width) / 2.0,
        MARGIN + TITLE_FONT_SIZE * 2.0,
        TITLE_FONT_SIZE,
        TEXT_COLOR,
    );

    let hint = "Reach the far corner. Never cross your own path.";
    let size = measure_text(hint, None, FONT_SIZE as u16, 1.0);
    draw_text(
        hint,
        (screen_w - size.width) / 2.0,
        MARGIN + TITLE_FONT_SIZE * 3.0,
        FONT_SIZE,
        SCORE_COLOR,
    );
}
