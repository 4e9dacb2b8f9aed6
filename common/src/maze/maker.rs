use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::grid::{Direction, Grid};

/// One unit of pending work: a cell whose four directions were shuffled
/// when the cell was first entered, and how many have been tried so far.
struct Frame {
    x: usize,
    y: usize,
    directions: [Direction; 4],
    tried: usize,
}

pub struct MazeMaker<R: Rng> {
    pub grid: Grid,
    rng: R,
}

impl MazeMaker<ThreadRng> {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_rng(cols, rows, rand::rng())
    }
}

impl MazeMaker<StdRng> {
    pub fn seeded(cols: usize, rows: usize, seed: u64) -> Self {
        Self::with_rng(cols, rows, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeMaker<R> {
    pub fn with_rng(cols: usize, rows: usize, rng: R) -> Self {
        Self {
            grid: Grid::new(cols, rows),
            rng,
        }
    }

    /// Randomized depth-first backtracking from the start cell. Carves a
    /// spanning tree of the grid: every cell reachable, no cycles. Runs on
    /// an explicit stack, at most one frame per cell, so large mazes cannot
    /// overflow the call stack.
    pub fn carve_from(&mut self, start_x: usize, start_y: usize) {
        self.grid.visit(start_x, start_y);
        let initial = self.frame(start_x, start_y);
        let mut stack = vec![initial];

        while let Some(frame) = stack.last_mut() {
            if frame.tried == frame.directions.len() {
                stack.pop();
                continue;
            }

            let (x, y) = (frame.x, frame.y);
            let direction = frame.directions[frame.tried];
            frame.tried += 1;

            if let Some((nx, ny)) = self.grid.neighbor(x, y, direction) {
                if !self.grid.is_visited(nx, ny) {
                    self.grid.carve(x, y, direction);
                    self.grid.visit(nx, ny);
                    let next = self.frame(nx, ny);
                    stack.push(next);
                }
            }
        }
    }

    // Fisher-Yates over the four directions: every ordering equally likely.
    fn frame(&mut self, x: usize, y: usize) -> Frame {
        let mut directions = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];
        directions.shuffle(&mut self.rng);

        Frame {
            x,
            y,
            directions,
            tried: 0,
        }
    }
}
