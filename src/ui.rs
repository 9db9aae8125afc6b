use alarm_calls::simulation::environment::Environment;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub alarm_history: VecDeque<(f64, f64)>,
    last_update_tick: u64,
    update_interval: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            alarm_history: VecDeque::new(),
            last_update_tick: 0,
            update_interval: 30, // Sample twice a second at 60 FPS
        }
    }

    pub fn update_history(&mut self, environment: &Environment) {
        if environment.tick - self.last_update_tick >= self.update_interval {
            self.last_update_tick = environment.tick;

            self.alarm_history
                .push_back((environment.tick as f64, environment.ledger.total() as f64));

            if self.alarm_history.len() > MAX_HISTORY_POINTS {
                self.alarm_history.pop_front();
            }
        }
    }
}

pub fn draw_ui(state: &UIState, environment: &Environment) {
    egui_macroquad::ui(|egui_ctx| {
        egui_ctx.set_visuals(egui::Visuals::dark());

        egui::Window::new("Interacoes")
            .default_open(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(260.0)
            .show(egui_ctx, |ui| {
                ui.label(format!("Tick: {}", environment.tick));
                ui.separator();

                egui::Grid::new("ledger_grid").striped(true).show(ui, |ui| {
                    for agent in &environment.agents {
                        ui.label(agent.name.as_str());
                        ui.label(environment.ledger.count(&agent.name).to_string());
                        ui.end_row();
                    }
                });

                ui.separator();
                ui.label("Recent alarms");
                let events = environment.event_log.events();
                if events.is_empty() {
                    ui.label(
                        egui::RichText::new("No alarms yet...")
                            .color(egui::Color32::from_rgb(150, 150, 150))
                            .size(12.0),
                    );
                } else {
                    for event in events {
                        ui.label(
                            egui::RichText::new(format!("[{}] {}", event.tick, event.description()))
                                .size(11.0)
                                .monospace(),
                        );
                    }
                }

                ui.separator();
                draw_alarm_plot(ui, &state.alarm_history);
            });
    });
}

fn draw_alarm_plot(ui: &mut egui::Ui, data: &VecDeque<(f64, f64)>) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("alarm_plot")
        .height(120.0)
        .show_axes([true, true])
        .label_formatter(|_, value| format!("Tick: {:.0}\nAlarms: {:.0}", value.x, value.y))
        .show(ui, |plot_ui| {
            let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
            let line = Line::new(points)
                .color(egui::Color32::from_rgb(255, 220, 80))
                .name("Total alarms");
            plot_ui.line(line);
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
