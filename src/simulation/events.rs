//! Event system for perception results.
//!
//! Detection runs over an immutable view of the environment and queues one
//! event per agent/predator pair in range. The queue is then applied in
//! order, which is where alarms are raised and the ledger is updated.

use tracing::warn;

use super::agent::AlarmCall;
use super::environment::Environment;

/// Events that modify simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// An agent has a predator within its perception radius.
    PredatorSighted {
        /// Index of the agent in the environment.
        agent_idx: usize,
        /// Index of the predator in the environment.
        predator_idx: usize,
    },
}

/// Queue for collecting simulation events during detection.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events are queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queued events in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &SimulationEvent> {
        self.events.iter()
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the environment and returns the alarms raised.
pub fn apply_events(state: &mut Environment, mut queue: EventQueue) -> Vec<AlarmCall> {
    let reinforce = state.config().reinforce_alarms;
    let mut alarms = Vec::with_capacity(queue.len());

    for event in queue.drain() {
        match event {
            SimulationEvent::PredatorSighted {
                agent_idx,
                predator_idx,
            } => {
                let predator = &state.predators[predator_idx];
                let agent = &mut state.agents[agent_idx];

                let alarm = agent.trigger_alarm(predator);
                state.ledger.record(&agent.name);

                if reinforce {
                    if let Err(e) = agent.increase_symbol_value(alarm.symbol) {
                        warn!(agent = %agent.name, "could not reinforce alarm: {e}");
                    }
                }

                state.event_log.log(state.tick, alarm.clone());
                alarms.push(alarm);
            }
        }
    }

    alarms
}
