//! The environment owns every agent and predator and advances them tick by tick.
//!
//! Each tick:
//! - every agent, then every predator, draws a fresh direction in `[-1, 1]²`
//! - every entity moves and is clamped into the arena
//! - every agent checks every predator; each one in range raises an alarm
//!   and adds one to the agent's ledger entry

use std::path::Path;

use rand::Rng;
use tracing::{debug, warn};

use super::agent::{Agent, AlarmCall};
use super::error::Result;
use super::event_log::EventLog;
use super::events::{self, EventQueue, SimulationEvent};
use super::ledger::InteractionLedger;
use super::locatable::Locatable;
use super::params::SimConfig;
use super::predator::{Predator, PredatorKind};

/// The simulation state: agents, predators and the interaction ledger.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Prey agents, addressed by index.
    pub agents: Vec<Agent>,
    /// One predator per [`PredatorKind`].
    pub predators: Vec<Predator>,
    /// Interaction counts per agent name.
    pub ledger: InteractionLedger,
    /// Recent alarms, newest first.
    pub event_log: EventLog,
    /// Number of completed ticks.
    pub tick: u64,
    config: SimConfig,
}

impl Environment {
    /// Creates an environment with `n_agents` random monkeys and one predator per kind.
    ///
    /// `n_predators` does not size the predator set: exactly one Eagle, one
    /// Snake and one Tiger are always created.
    pub fn new(config: &SimConfig, n_agents: usize, n_predators: usize) -> Self {
        if n_predators != PredatorKind::ALL.len() {
            warn!(
                requested = n_predators,
                created = PredatorKind::ALL.len(),
                "predator count is fixed at one per kind"
            );
        }

        let agents = (1..=n_agents)
            .map(|i| Agent::new_random(format!("Macaco {i}"), config))
            .collect();

        Self::with_agents(config, agents)
    }

    /// Creates an environment from prebuilt agents and the standard predator set.
    pub fn with_agents(config: &SimConfig, agents: Vec<Agent>) -> Self {
        let (x, y) = config.predator_spawn;
        let predators = PredatorKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| Predator::new(i + 1, kind, x, y, config))
            .collect();

        Self {
            agents,
            predators,
            ledger: InteractionLedger::new(),
            event_log: EventLog::new(config.event_log_capacity),
            tick: 0,
            config: config.clone(),
        }
    }

    /// Configuration the environment was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advances the simulation by one tick using the thread-local RNG.
    pub fn update(&mut self) -> Vec<AlarmCall> {
        self.update_with(&mut rand::rng())
    }

    /// Advances the simulation by one tick drawing directions from `rng`.
    pub fn update_with<R: Rng>(&mut self, rng: &mut R) -> Vec<AlarmCall> {
        for agent in &mut self.agents {
            agent.set_direction(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        }
        for predator in &mut self.predators {
            predator.set_direction(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        }

        self.advance_all();

        let alarms = self.resolve_perception();
        self.tick += 1;

        debug!(tick = self.tick, alarms = alarms.len(), "tick complete");
        alarms
    }

    /// Moves every entity along its current direction.
    pub fn advance_all(&mut self) {
        let config = &self.config;
        for agent in &mut self.agents {
            agent.advance(config);
        }
        for predator in &mut self.predators {
            predator.advance(config);
        }
    }

    /// Queues one event per agent/predator pair within the agent's predator radius.
    pub fn perceive(&self) -> EventQueue {
        let mut queue = EventQueue::new();
        for (agent_idx, agent) in self.agents.iter().enumerate() {
            for (predator_idx, predator) in self.predators.iter().enumerate() {
                if agent.perceives(predator) {
                    queue.push(SimulationEvent::PredatorSighted {
                        agent_idx,
                        predator_idx,
                    });
                }
            }
        }
        queue
    }

    /// Detects sightings at the current positions and raises their alarms.
    pub fn resolve_perception(&mut self) -> Vec<AlarmCall> {
        let queue = self.perceive();
        events::apply_events(self, queue)
    }

    /// Writes the interaction ledger to `path`.
    pub fn export_log(&self, path: impl AsRef<Path>) -> Result<()> {
        self.ledger.export(path)
    }
}
