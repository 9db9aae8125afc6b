//! Event logging system for displaying recent alarm calls.

use std::collections::VecDeque;

use super::agent::AlarmCall;

/// A logged alarm for display in the UI.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    /// Tick at which the alarm was raised
    pub tick: u64,
    /// The alarm itself
    pub alarm: AlarmCall,
}

impl LoggedEvent {
    /// Human-readable description of the alarm
    pub fn description(&self) -> String {
        format!(
            "{} -> alarme {} ({} #{})",
            self.alarm.agent, self.alarm.symbol, self.alarm.predator, self.alarm.predator_id
        )
    }
}

/// Event log that tracks recent alarm calls
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new alarm to the log
    pub fn log(&mut self, tick: u64, alarm: AlarmCall) {
        self.events.push_front(LoggedEvent { tick, alarm });

        // Keep only the most recent events
        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }
}
