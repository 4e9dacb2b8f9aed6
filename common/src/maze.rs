pub mod maker;

use std::fmt;

use crate::grid::{Direction, Grid};
use maker::MazeMaker;

/// A carved maze. The open passages form a spanning tree of the grid, so
/// any two cells are joined by exactly one path.
pub struct Maze {
    pub grid: Grid,
}

impl Maze {
    /// Generates a maze rooted at the top-left cell using the process-wide
    /// random generator.
    pub fn new(cols: usize, rows: usize) -> Self {
        let mut maker = MazeMaker::new(cols, rows);
        maker.carve_from(0, 0);
        Self { grid: maker.grid }
    }

    /// Deterministic variant: the same seed always produces the same maze.
    pub fn seeded(cols: usize, rows: usize, seed: u64) -> Self {
        let mut maker = MazeMaker::seeded(cols, rows, seed);
        maker.carve_from(0, 0);
        Self { grid: maker.grid }
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn log(&self) -> String {
        let cols = self.cols();
        let mut out = String::new();

        for y in 0..self.rows() {
            for x in 0..cols {
                out.push('+');
                out.push_str(if self.grid.cell(x, y).has_wall(Direction::Up) {
                    "--"
                } else {
                    "  "
                });
            }
            out.push_str("+\n");

            for x in 0..cols {
                out.push(if self.grid.cell(x, y).has_wall(Direction::Left) {
                    '|'
                } else {
                    ' '
                });
                out.push_str("  ");
            }
            out.push(if self.grid.cell(cols - 1, y).has_wall(Direction::Right) {
                '|'
            } else {
                ' '
            });
            out.push('\n');
        }

        for _ in 0..cols {
            out.push_str("+--");
        }
        out.push('+');
        out
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
