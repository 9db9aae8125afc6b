use alarm_calls::simulation::environment::Environment;
use alarm_calls::simulation::locatable::Locatable;
use alarm_calls::simulation::predator::Rgba;
use macroquad::prelude::*;

const PERCEPTION_OUTLINE: Color = Color::new(1.0, 1.0, 0.0, 100.0 / 255.0);

trait ToColor {
    fn to_color(self) -> Color;
}

impl ToColor for Rgba {
    fn to_color(self) -> Color {
        Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Square of side `side` centred on `(x, y)`.
fn centered_square(x: f64, y: f64, side: f64) -> Rect {
    Rect::new(
        (x - side / 2.0) as f32,
        (y - side / 2.0) as f32,
        side as f32,
        side as f32,
    )
}

fn fill_square(x: f64, y: f64, side: f64, color: Color) {
    let rect = centered_square(x, y, side);
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

pub fn draw_environment(environment: &Environment) {
    clear_background(BLACK);
    draw_agents(environment);
    draw_predators(environment);
}

pub fn draw_agents(environment: &Environment) {
    environment.agents.iter().for_each(|agent| {
        // perception radius, a square standing in for the circle
        let body = agent.body();
        let outline = centered_square(body.x(), body.y(), agent.predator_radius * 2.0);
        draw_rectangle_lines(outline.x, outline.y, outline.w, outline.h, 1.0, PERCEPTION_OUTLINE);

        let look = agent.species.appearance(environment.config());
        fill_square(body.x(), body.y(), look.size, look.color.to_color());
    });
}

pub fn draw_predators(environment: &Environment) {
    environment.predators.iter().for_each(|predator| {
        let body = predator.body();
        fill_square(body.x(), body.y(), body.size, predator.color.to_color());
    });
}
