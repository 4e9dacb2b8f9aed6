use macroquad::prelude::*;

use crate::env::{self, GridConfig};
use crate::input::{self, SwipeTracker};
use crate::render;
use crate::state::{AppState, Session};
use crate::ui::{self, Button, Controls, MessageBox};

pub async fn run_game_loop() {
    let config = env::grid_config();
    print_banner(&config);

    let mut session = Session::new(&config);
    let controls = Controls::layout(&config);
    let mut swipe = SwipeTracker::new();

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Input is resolved against what was on screen when the frame
        // began; the redraw below then reflects any transition it caused.
        let message_box = current_message_box(&session);
        let buttons = active_buttons(&session, &controls, message_box.as_ref());

        for intent in input::poll_intents(&buttons, &mut swipe) {
            session.handle_intent(intent);
        }

        let message_box = current_message_box(&session);
        draw(&session, &controls, message_box.as_ref());

        next_frame().await;
    }
}

fn print_banner(config: &GridConfig) {
    println!(
        "One Way Out: cross the {}x{} maze without retracing a step.",
        config.cols, config.rows
    );
}

fn current_message_box(session: &Session) -> Option<MessageBox> {
    match session.state {
        AppState::Lost => Some(ui::lost_box(screen_width(), screen_height())),
        AppState::Won => session
            .game
            .as_ref()
            .map(|game| ui::won_box(game.score(), screen_width(), screen_height())),
        _ => None,
    }
}

fn active_buttons(
    session: &Session,
    controls: &Controls,
    message_box: Option<&MessageBox>,
) -> Vec<Button> {
    match session.state {
        AppState::Title => vec![controls.start.clone()],
        AppState::Playing => controls.buttons().cloned().collect(),
        AppState::Lost | AppState::Won => message_box
            .map(|message_box| vec![message_box.button.clone()])
            .unwrap_or_default(),
    }
}

fn draw(session: &Session, controls: &Controls, message_box: Option<&MessageBox>) {
    clear_background(BLACK);

    match session.state {
        AppState::Title => {
            ui::draw_title(screen_width());
            controls.draw_start(!session.start_pressed_once);
        }
        AppState::Playing => {
            draw_board(session, controls);
            controls.draw_start(false);
            for arrow in &controls.arrows {
                arrow.draw();
            }
        }
        AppState::Lost | AppState::Won => {
            draw_board(session, controls);
            if let Some(message_box) = message_box {
                message_box.draw();
            }
        }
    }
}

fn draw_board(session: &Session, controls: &Controls) {
    let Some(game) = session.game.as_ref() else {
        return;
    };
    render::draw_maze(&game.maze);
    render::draw_markers(game);
    controls.draw_score(game.score());
}
