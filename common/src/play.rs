use crate::grid::Direction;
use crate::maze::Maze;

pub const START: (usize, usize) = (0, 0);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Playing,
    Lost,
    Won,
}

/// Outcome of a single directional input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveResult {
    /// Accepted; play continues.
    Moved,
    /// Blocked by a wall or the grid edge, or input is frozen. No state
    /// change.
    Invalid,
    /// Accepted, but the new cell was already on this attempt's trail.
    LoopDetected,
    /// Accepted and landed on the goal.
    ReachedGoal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenColor {
    Red,
    Blue,
}

impl TokenColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenColor::Red => "red",
            TokenColor::Blue => "blue",
        }
    }
}

pub const GOAL_COLOR: TokenColor = TokenColor::Blue;

#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    pub color: TokenColor,
}

/// One playthrough of one maze: the player token, the trail of cells
/// walked this attempt, the move count, and whether play is still live.
/// Only `attempt_move` and `reset` mutate it.
pub struct Game {
    pub maze: Maze,
    pub player: Player,
    pub goal: (usize, usize),
    trail: Vec<(usize, usize)>,
    score: u32,
    status: Status,
}

impl Game {
    pub fn new(maze: Maze) -> Self {
        let goal = (maze.cols() - 1, maze.rows() - 1);
        let mut game = Self {
            maze,
            player: Player {
                x: START.0,
                y: START.1,
                color: TokenColor::Red,
            },
            goal,
            trail: Vec::new(),
            score: 0,
            status: Status::Playing,
        };
        game.reset();
        game
    }

    /// Returns play to the starting position with a fresh trail and score.
    /// The maze is untouched. The start cell goes straight onto the trail,
    /// so stepping away and back again counts as doubling back. On a grid
    /// where the start is the goal there is nothing to do: the game is
    /// already won.
    pub fn reset(&mut self) {
        self.player.x = START.0;
        self.player.y = START.1;
        self.trail.clear();
        self.trail.push(START);
        self.score = 0;
        self.status = if START == self.goal {
            Status::Won
        } else {
            Status::Playing
        };
    }

    /// Validates one directional input against the grid edge and the wall
    /// flags, then against the trail and the goal. Checking the trail
    /// before the goal means a doubling-back entry into the goal cell is a
    /// loss, not a win.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if self.status != Status::Playing {
            return MoveResult::Invalid;
        }

        let (x, y) = (self.player.x, self.player.y);
        let Some((nx, ny)) = self.maze.grid.neighbor(x, y, direction) else {
            return MoveResult::Invalid;
        };
        if self.maze.grid.cell(x, y).has_wall(direction) {
            return MoveResult::Invalid;
        }

        self.player.x = nx;
        self.player.y = ny;
        self.score += 1;

        let revisit = self.trail.contains(&(nx, ny));
        self.trail.push((nx, ny));

        if revisit {
            self.status = Status::Lost;
            return MoveResult::LoopDetected;
        }

        if (nx, ny) == self.goal {
            self.status = Status::Won;
            return MoveResult::ReachedGoal;
        }

        MoveResult::Moved
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn trail(&self) -> &[(usize, usize)] {
        &self.trail
    }
}
