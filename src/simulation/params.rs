use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{Result, SimulationError};

/// Default log file written at shutdown.
pub const DEFAULT_LOG_PATH: &str = "log_interacoes_agentes.txt";

/// Simulation parameters that control arena size, entity sizing and pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width in pixels.
    pub box_width: f64,
    /// Arena height in pixels.
    pub box_height: f64,
    /// Side length of an agent's body.
    pub agent_size: f64,
    /// Distance an agent covers per tick at full direction.
    pub agent_speed: f64,
    /// Side length of a predator's body.
    pub predator_size: f64,
    /// Distance a predator covers per tick at full direction.
    pub predator_speed: f64,
    /// Distance at which an agent notices a predator.
    pub predator_perception_radius: f64,
    /// Distance at which an agent hears an alarm call.
    pub alarm_perception_radius: f64,
    /// Number of prey agents.
    pub n_agents: usize,
    /// Requested predator count. One predator per kind is always created.
    pub n_predators: usize,
    /// Position every predator starts at.
    pub predator_spawn: (f64, f64),
    /// Frames per second the frame loop aims for.
    pub target_fps: u32,
    /// Where the interaction log is written on exit.
    pub log_path: PathBuf,
    /// Number of recent alarms kept for display.
    pub event_log_capacity: usize,
    /// Reinforce the chosen symbol every time an alarm is raised.
    pub reinforce_alarms: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            box_width: 800.0,
            box_height: 600.0,
            agent_size: 10.0,
            agent_speed: 8.0,
            predator_size: 15.0,
            predator_speed: 10.0,
            predator_perception_radius: 30.0,
            alarm_perception_radius: 10.0,
            n_agents: 6,
            n_predators: 3,
            predator_spawn: (250.0, 250.0),
            target_fps: 60,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            event_log_capacity: 20,
            reinforce_alarms: false,
        }
    }
}

impl SimConfig {
    /// Window dimensions in whole pixels.
    pub fn window_size(&self) -> (i32, i32) {
        (self.box_width as i32, self.box_height as i32)
    }

    /// Saves the configuration to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// The result is checked with [`SimConfig::validate`] before it is returned.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that sizes, speeds and radii are finite and non-negative, and
    /// that the arena is at least as large as the biggest body on each axis.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("agent_size", self.agent_size),
            ("agent_speed", self.agent_speed),
            ("predator_size", self.predator_size),
            ("predator_speed", self.predator_speed),
            ("predator_perception_radius", self.predator_perception_radius),
            ("alarm_perception_radius", self.alarm_perception_radius),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let body = self.agent_size.max(self.predator_size);
        if self.box_width < body || self.box_height < body {
            return Err(SimulationError::InvalidConfig(format!(
                "arena {}x{} is smaller than a body of size {body}",
                self.box_width, self.box_height
            )));
        }
        Ok(())
    }
}
