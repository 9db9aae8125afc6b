//! # Alarm Calls - Predator Alarm Simulation
//!
//! Prey agents ("monkeys") and three typed predators random-walk inside a
//! bounded arena. When a predator comes within an agent's perception radius
//! the agent calls out the alarm symbol it weighs highest, and the encounter
//! is counted. The counts are written to a plain-text log on exit.
//!
//! ## Features
//!
//! - Random-walk movement with boundary clamping
//! - Three predator kinds (eagle, snake, tiger), one of each
//! - Per-agent table of ten alarm-symbol weights
//! - Optional reinforcement of the chosen symbol
//! - Interaction ledger exported as a text log
//! - Real-time visualization with macroquad and an egui overlay
//!
//! ## Core Modules
//!
//! - [`simulation::environment`] - Tick logic and ownership of all entities
//! - [`simulation::agent`] - Prey agents and their symbol tables
//! - [`simulation::predator`] - Predator kinds and colours
//! - [`simulation::ledger`] - Interaction counts and log export
//! - [`simulation::events`] - Perception events applied after detection

/// Fixed-timestep pacing for the frame loop.
pub mod frame;

/// Core simulation logic and data structures.
pub mod simulation {
    /// Prey agents, symbol tables and alarm calls.
    pub mod agent;
    /// The simulation state and its per-tick update.
    pub mod environment;
    /// Error type for simulation operations.
    pub mod error;
    /// Bounded log of recent alarms for display.
    pub mod event_log;
    /// Perception events collected during detection and applied afterwards.
    pub mod events;
    /// Geometric utility functions for distances and clamping.
    pub mod geometric_utils;
    /// Per-agent interaction counts and log export.
    pub mod ledger;
    /// Shared movement state and the trait for entities that move.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity that
    /// walks the arena (Agent, Predator).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Typed predators.
    pub mod predator;
}
