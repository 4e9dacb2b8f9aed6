pub mod grid;
pub mod intent;
pub mod maze;
pub mod play;
