use std::time::Instant;

use alarm_calls::frame::FramePacer;
use alarm_calls::simulation::environment::Environment;
use alarm_calls::simulation::params::SimConfig;
use macroquad::prelude::*;
use tracing::{error, info};

mod graphics;
mod ui;

const WINDOW_TITLE: &str = "Trabalho de Inteligência Artificial";

fn window_conf() -> Conf {
    let (window_width, window_height) = SimConfig::default().window_size();
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

// macroquad panics (exit status 101) if the window or renderer cannot be created.
#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let config = SimConfig::default();
    let mut environment = Environment::new(&config, config.n_agents, config.n_predators);
    let pacer = FramePacer::new(config.target_fps);
    let mut ui_state = ui::UIState::new();

    info!(
        agents = environment.agents.len(),
        predators = environment.predators.len(),
        "starting alarm-call simulation"
    );

    // handle the close request ourselves so the log is written before exit
    prevent_quit();

    let mut quit = false;
    while !quit {
        let frame_start = Instant::now();

        if is_quit_requested() {
            quit = true;
        }

        environment.update();
        ui_state.update_history(&environment);

        graphics::draw_environment(&environment);
        ui::draw_ui(&ui_state, &environment);
        ui::process_egui();

        pacer.wait(frame_start);
        next_frame().await;
    }

    match environment.export_log(&config.log_path) {
        Ok(()) => info!(path = %config.log_path.display(), "Log gerado com sucesso!"),
        Err(e) => error!(
            path = %config.log_path.display(),
            "Erro ao criar o arquivo de log: {e}"
        ),
    }
}
