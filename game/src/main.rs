mod env;
mod input;
mod render;
mod run;
mod state;
mod ui;

use macroquad::prelude::Conf;

fn window_conf() -> Conf {
    let config = env::grid_config();
    let width = config.cols as f32 * render::CELL_SIZE + 2.0 * render::MARGIN;
    let height =
        config.rows as f32 * render::CELL_SIZE + 2.0 * render::MARGIN + ui::CONTROLS_HEIGHT;

    Conf {
        window_title: "One Way Out".to_string(),
        window_width: width as i32,
        window_height: height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    run::run_game_loop().await;
}
