//! Shared movement state and the trait for entities that walk the arena.
//!
//! Agents and predators both embed a [`Body`]: a position, a direction set
//! fresh every tick, and the speed and size that control how far they move
//! and how close to the walls they may get.

use ndarray::Array1;

use super::geometric_utils::clamp_into_mut;
use super::params::SimConfig;

/// Position, direction and movement constants of a single entity.
#[derive(Debug, Clone)]
pub struct Body {
    /// Position in 2D space (centre of the body).
    pub pos: Array1<f64>,
    /// Direction applied on the next move, not normalized.
    pub vel: Array1<f64>,
    /// Distance covered per tick at full direction.
    pub speed: f64,
    /// Side length of the square body.
    pub size: f64,
}

impl Body {
    /// Creates a body at rest at the given position.
    pub fn new(x: f64, y: f64, speed: f64, size: f64) -> Self {
        Self {
            pos: Array1::from_vec(vec![x, y]),
            vel: Array1::zeros(2),
            speed,
            size,
        }
    }

    /// Stores the raw direction used by the next [`Body::advance`].
    pub fn set_direction(&mut self, dx: f64, dy: f64) {
        self.vel[0] = dx;
        self.vel[1] = dy;
    }

    /// Moves along the stored direction and clamps into the arena.
    pub fn advance(&mut self, config: &SimConfig) {
        self.pos.scaled_add(self.speed, &self.vel);
        clamp_into_mut(&mut self.pos, self.size, config.box_width, config.box_height);
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.pos[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.pos[1]
    }
}

/// Trait for entities with a body that moves inside the arena.
///
/// Any type that implements this trait:
/// - Has a position in 2D space
/// - Takes a new direction each tick and moves along it
pub trait Locatable {
    /// Returns a reference to the entity's body.
    fn body(&self) -> &Body;

    /// Returns a mutable reference to the entity's body.
    fn body_mut(&mut self) -> &mut Body;

    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f64> {
        &self.body().pos
    }

    /// Sets the direction for the next move.
    fn set_direction(&mut self, dx: f64, dy: f64) {
        self.body_mut().set_direction(dx, dy);
    }

    /// Applies `pos += direction * speed` and keeps the body inside the arena.
    fn advance(&mut self, config: &SimConfig) {
        self.body_mut().advance(config);
    }
}
