//! Typed predators that roam the arena.

use std::fmt;

use super::locatable::{Body, Locatable};
use super::params::SimConfig;

/// RGBA colour used to draw an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Creates a colour from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// The kinds of predator. Every environment holds exactly one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredatorKind {
    /// Attacks from the air.
    Eagle,
    /// Attacks from the ground.
    Snake,
    /// Attacks from the bush.
    Tiger,
}

impl PredatorKind {
    /// All kinds in creation order.
    pub const ALL: [PredatorKind; 3] = [PredatorKind::Eagle, PredatorKind::Snake, PredatorKind::Tiger];

    /// Display colour for this kind.
    pub fn color(self) -> Rgba {
        match self {
            PredatorKind::Eagle => Rgba::new(255, 0, 0, 255),
            PredatorKind::Snake => Rgba::new(255, 255, 255, 255),
            PredatorKind::Tiger => Rgba::new(0, 0, 255, 255),
        }
    }
}

impl fmt::Display for PredatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PredatorKind::Eagle => "aguia",
            PredatorKind::Snake => "cobra",
            PredatorKind::Tiger => "tigre",
        };
        f.write_str(name)
    }
}

/// A predator wandering the arena at random.
#[derive(Debug, Clone)]
pub struct Predator {
    /// Identifier, starting at 1.
    pub id: usize,
    /// Kind of predator.
    pub kind: PredatorKind,
    /// Position and movement state.
    pub body: Body,
    /// Colour derived from `kind` at construction.
    pub color: Rgba,
}

impl Predator {
    /// Creates a predator of the given kind at `(x, y)`.
    pub fn new(id: usize, kind: PredatorKind, x: f64, y: f64, config: &SimConfig) -> Self {
        Self {
            id,
            kind,
            body: Body::new(x, y, config.predator_speed, config.predator_size),
            color: kind.color(),
        }
    }
}

impl Locatable for Predator {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
