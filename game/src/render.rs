use macroquad::prelude::*;

use common::grid::Direction;
use common::maze::Maze;
use common::play::{GOAL_COLOR, Game, TokenColor};

pub const CELL_SIZE: f32 = 40.0;
pub const MARGIN: f32 = 20.0; // Between the window edge and the maze.

const WALL_THICKNESS: f32 = 5.0;
const WALL_COLOR: Color = GREEN;
const MARKER_RADIUS: f32 = CELL_SIZE / 2.0 - 5.0;

fn token_color(color: TokenColor) -> Color {
    match color {
        TokenColor::Red => RED,
        TokenColor::Blue => BLUE,
    }
}

/// Full repaint of the maze: each cell draws an edge wherever its wall
/// flag is still set.
pub fn draw_maze(maze: &Maze) {
    for y in 0..maze.rows() {
        for x in 0..maze.cols() {
            let cell = maze.grid.cell(x, y);
            let left = MARGIN + x as f32 * CELL_SIZE;
            let top = MARGIN + y as f32 * CELL_SIZE;
            let right = left + CELL_SIZE;
            let bottom = top + CELL_SIZE;

            if cell.has_wall(Direction::Up) {
                draw_line(left, top, right, top, WALL_THICKNESS, WALL_COLOR);
            }
            if cell.has_wall(Direction::Right) {
                draw_line(right, top, right, bottom, WALL_THICKNESS, WALL_COLOR);
            }
            if cell.has_wall(Direction::Down) {
                draw_line(left, bottom, right, bottom, WALL_THICKNESS, WALL_COLOR);
            }
            if cell.has_wall(Direction::Left) {
                draw_line(left, top, left, bottom, WALL_THICKNESS, WALL_COLOR);
            }
        }
    }
}

/// Goal first, then the player, so the player stays visible when the two
/// share a cell.
pub fn draw_markers(game: &Game) {
    let (gx, gy) = game.goal;
    draw_token(gx, gy, GOAL_COLOR);
    draw_token(game.player.x, game.player.y, game.player.color);
}

fn draw_token(x: usize, y: usize, color: TokenColor) {
    let cx = MARGIN + x as f32 * CELL_SIZE + CELL_SIZE / 2.0;
    let cy = MARGIN + y as f32 * CELL_SIZE + CELL_SIZE / 2.0;
    draw_circle(cx, cy, MARKER_RADIUS, token_color(color));
}
