//! Prey agents and their alarm-symbol tables.
//!
//! An agent carries a table of [`SYMBOL_COUNT`] weights, one per alarm call
//! it can make. When it notices a predator it calls out the symbol with the
//! highest weight. Reinforcing a symbol bumps its weight by
//! [`SYMBOL_INCREMENT`].

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use tracing::info;

use super::error::{Result, SimulationError};
use super::geometric_utils::distance;
use super::locatable::{Body, Locatable};
use super::params::SimConfig;
use super::predator::{Predator, PredatorKind, Rgba};

/// Number of alarm symbols every agent knows.
pub const SYMBOL_COUNT: usize = 10;

/// Amount added to a symbol weight by [`SymbolTable::increase`].
pub const SYMBOL_INCREMENT: f64 = 0.1;

/// Fixed-size table of alarm-symbol weights.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    weights: Array1<f64>,
}

impl SymbolTable {
    /// Creates a table with weights drawn uniformly from `[0, 1)`.
    pub fn new_random() -> Self {
        Self {
            weights: Array1::random(SYMBOL_COUNT, Uniform::new(0., 1.)),
        }
    }

    /// Creates a table from explicit weights.
    pub fn from_weights(weights: [f64; SYMBOL_COUNT]) -> Self {
        Self {
            weights: Array1::from_vec(weights.to_vec()),
        }
    }

    /// Read-only view of the weights.
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// Index of the largest weight. Ties go to the lowest index.
    pub fn best_symbol(&self) -> usize {
        let mut best = 0;
        for (i, &w) in self.weights.iter().enumerate().skip(1) {
            if w > self.weights[best] {
                best = i;
            }
        }
        best
    }

    /// Adds [`SYMBOL_INCREMENT`] to the weight at `index`.
    pub fn increase(&mut self, index: usize) -> Result<()> {
        let len = self.weights.len();
        let weight = self
            .weights
            .get_mut(index)
            .ok_or(SimulationError::SymbolIndexOutOfRange { index, len })?;
        *weight += SYMBOL_INCREMENT;
        Ok(())
    }
}

/// Agent variants. Each variant decides how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    /// The only shipped prey.
    Monkey,
}

/// How a species is drawn: fill colour and side of its square body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Fill colour of the body.
    pub color: Rgba,
    /// Side length of the body.
    pub size: f64,
}

impl Species {
    /// Colour and body size this species is drawn with.
    pub fn appearance(self, config: &SimConfig) -> Appearance {
        match self {
            Species::Monkey => Appearance {
                color: Rgba::new(0, 255, 0, 255),
                size: config.agent_size,
            },
        }
    }
}

/// An alarm raised by an agent that noticed a predator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmCall {
    /// Name of the agent that called.
    pub agent: String,
    /// Symbol the agent chose.
    pub symbol: usize,
    /// Id of the predator that was seen.
    pub predator_id: usize,
    /// Kind of the predator that was seen.
    pub predator: PredatorKind,
}

/// A prey agent wandering the arena.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Unique name, used as the ledger key.
    pub name: String,
    /// Distance at which predators are noticed.
    pub predator_radius: f64,
    /// Distance at which alarm calls are heard.
    pub alarm_radius: f64,
    /// Position and movement state.
    pub body: Body,
    /// Alarm-symbol weights.
    pub symbols: SymbolTable,
    /// Variant of agent.
    pub species: Species,
}

impl Agent {
    /// Creates a monkey at a random position inside the arena with random symbol weights.
    pub fn new_random(name: String, config: &SimConfig) -> Self {
        let half = config.agent_size / 2.0;
        let span = Array1::from_vec(vec![
            config.box_width - config.agent_size,
            config.box_height - config.agent_size,
        ]);
        let pos = Array1::random(2, Uniform::new(0., 1.)) * span + half;

        Self::new(name, pos[0], pos[1], SymbolTable::new_random(), config)
    }

    /// Creates a monkey at `(x, y)` with the given symbol table.
    pub fn new(name: String, x: f64, y: f64, symbols: SymbolTable, config: &SimConfig) -> Self {
        Self {
            name,
            predator_radius: config.predator_perception_radius,
            alarm_radius: config.alarm_perception_radius,
            body: Body::new(x, y, config.agent_speed, config.agent_size),
            symbols,
            species: Species::Monkey,
        }
    }

    /// Returns `true` if `predator` is within the predator-perception radius.
    pub fn perceives(&self, predator: &Predator) -> bool {
        distance(self.pos(), predator.pos()) <= self.predator_radius
    }

    /// Calls out the strongest symbol for the given predator.
    pub fn trigger_alarm(&self, predator: &Predator) -> AlarmCall {
        let symbol = self.symbols.best_symbol();
        info!(
            agent = %self.name,
            symbol,
            predator = %predator.kind,
            "{} disparou o alarme {} para o predador {}",
            self.name,
            symbol,
            predator.kind
        );
        AlarmCall {
            agent: self.name.clone(),
            symbol,
            predator_id: predator.id,
            predator: predator.kind,
        }
    }

    /// Reinforces the symbol at `index`.
    pub fn increase_symbol_value(&mut self, index: usize) -> Result<()> {
        self.symbols.increase(index)
    }
}

impl Locatable for Agent {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
