use common::intent::Intent;
use common::maze::Maze;
use common::play::{Game, MoveResult, Status};

use crate::env::GridConfig;

/// Which screen the player is on. `Title` is the only state without a
/// game behind it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppState {
    Title,
    Playing,
    Lost,
    Won,
}

pub struct Session {
    pub state: AppState,
    pub game: Option<Game>,
    /// The start button blinks until its first press.
    pub start_pressed_once: bool,
    cols: usize,
    rows: usize,
}

impl Session {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            state: AppState::Title,
            game: None,
            start_pressed_once: false,
            cols: config.cols,
            rows: config.rows,
        }
    }

    pub fn transition(&mut self, new_state: AppState) {
        self.state = new_state;
    }

    /// The single entry point for every input adapter. Intents that make
    /// no sense in the current state are dropped, the same way a move into
    /// a wall is.
    pub fn handle_intent(&mut self, intent: Intent) {
        match (self.state, intent) {
            // Start works from anywhere: fresh maze, fresh state.
            (_, Intent::Start) => {
                self.start_pressed_once = true;
                self.new_game();
            }
            (AppState::Playing, Intent::Move(direction)) => {
                let Some(game) = self.game.as_mut() else {
                    return;
                };
                match game.attempt_move(direction) {
                    MoveResult::LoopDetected => self.transition(AppState::Lost),
                    MoveResult::ReachedGoal => self.transition(AppState::Won),
                    MoveResult::Moved | MoveResult::Invalid => {}
                }
            }
            (AppState::Lost, Intent::Restart) => {
                if let Some(game) = self.game.as_mut() {
                    game.reset();
                    self.transition(AppState::Playing);
                }
            }
            (AppState::Won, Intent::PlayAgain) => self.new_game(),
            _ => {}
        }
    }

    fn new_game(&mut self) {
        let game = Game::new(Maze::new(self.cols, self.rows));
        // On a single-cell grid the start is the goal, so the very first
        // draw is already the win screen.
        let state = match game.status() {
            Status::Won => AppState::Won,
            _ => AppState::Playing,
        };
        self.game = Some(game);
        self.transition(state);
    }
}

#[cfg(test)]
mod tests {
    use common::grid::{Direction, Grid};
    use common::maze::Maze;
    use common::play::Game;

    use super::*;

    fn config(cols: usize, rows: usize) -> GridConfig {
        GridConfig { cols, rows }
    }

    // A session mid-play on a hand-carved 3x1 corridor: two rights win.
    fn corridor_session() -> Session {
        let mut grid = Grid::new(3, 1);
        grid.carve(0, 0, Direction::Right);
        grid.carve(1, 0, Direction::Right);

        let mut session = Session::new(&config(3, 1));
        session.game = Some(Game::new(Maze { grid }));
        session.state = AppState::Playing;
        session
    }

    #[test]
    fn start_begins_play_from_the_title() {
        let mut session = Session::new(&config(4, 4));
        assert_eq!(session.state, AppState::Title);
        assert!(session.game.is_none());

        session.handle_intent(Intent::Start);

        assert_eq!(session.state, AppState::Playing);
        assert!(session.game.is_some());
        assert!(session.start_pressed_once);
    }

    #[test]
    fn moves_are_ignored_outside_playing() {
        let mut session = Session::new(&config(4, 4));
        session.handle_intent(Intent::Move(Direction::Down));
        assert_eq!(session.state, AppState::Title);
        assert!(session.game.is_none());
    }

    #[test]
    fn winning_moves_the_session_to_won() {
        let mut session = corridor_session();

        session.handle_intent(Intent::Move(Direction::Right));
        assert_eq!(session.state, AppState::Playing);

        session.handle_intent(Intent::Move(Direction::Right));
        assert_eq!(session.state, AppState::Won);

        session.handle_intent(Intent::Move(Direction::Left));
        assert_eq!(session.state, AppState::Won);
        assert_eq!(session.game.as_ref().unwrap().score(), 2);
    }

    #[test]
    fn doubling_back_loses_and_restart_recovers_the_same_maze() {
        let mut session = corridor_session();

        session.handle_intent(Intent::Move(Direction::Right));
        session.handle_intent(Intent::Move(Direction::Left));
        assert_eq!(session.state, AppState::Lost);

        session.handle_intent(Intent::Restart);
        assert_eq!(session.state, AppState::Playing);

        let game = session.game.as_ref().unwrap();
        assert_eq!(game.score(), 0);
        assert!(!game.maze.grid.cell(0, 0).has_wall(Direction::Right));
    }

    #[test]
    fn restart_is_only_honored_after_a_loss() {
        let mut session = corridor_session();
        session.handle_intent(Intent::Move(Direction::Right));

        session.handle_intent(Intent::Restart);

        assert_eq!(session.state, AppState::Playing);
        assert_eq!(session.game.as_ref().unwrap().score(), 1);
    }

    #[test]
    fn play_again_after_a_win_builds_a_fresh_game() {
        let mut session = corridor_session();
        session.handle_intent(Intent::Move(Direction::Right));
        session.handle_intent(Intent::Move(Direction::Right));
        assert_eq!(session.state, AppState::Won);

        session.handle_intent(Intent::PlayAgain);

        assert_eq!(session.state, AppState::Playing);
        assert_eq!(session.game.as_ref().unwrap().score(), 0);
    }

    #[test]
    fn start_regenerates_mid_game() {
        let mut session = corridor_session();
        session.handle_intent(Intent::Move(Direction::Right));

        session.handle_intent(Intent::Start);

        assert_eq!(session.state, AppState::Playing);
        assert_eq!(session.game.as_ref().unwrap().score(), 0);
    }

    #[test]
    fn a_single_cell_game_is_won_on_start() {
        let mut session = Session::new(&config(1, 1));
        session.handle_intent(Intent::Start);
        assert_eq!(session.state, AppState::Won);
        assert_eq!(session.game.as_ref().unwrap().score(), 0);
    }
}
