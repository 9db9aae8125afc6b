#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use alarm_calls::simulation::agent::{Agent, SymbolTable};
use alarm_calls::simulation::environment::Environment;
use alarm_calls::simulation::error::SimulationError;
use alarm_calls::simulation::ledger::InteractionLedger;
use alarm_calls::simulation::params::{DEFAULT_LOG_PATH, SimConfig};
use std::fs;

#[test]
fn test_export_writes_every_entry_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");

    let ledger: InteractionLedger = [("C", 5), ("A", 2), ("B", 0)]
        .into_iter()
        .map(|(name, n)| (name.to_owned(), n))
        .collect();

    ledger.export(&path).expect("Failed to export ledger");

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Log de Interacoes por Agente:\n\
         ----------------------------------------------\n\
         A interagiu 2 vezes.\n\
         B interagiu 0 vezes.\n\
         C interagiu 5 vezes.\n"
    );
}

#[test]
fn test_export_overwrites_previous_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    fs::write(&path, "stale contents that are much longer than the new log\n".repeat(20)).unwrap();

    let mut ledger = InteractionLedger::new();
    ledger.record("Macaco 1");
    ledger.export(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.ends_with("Macaco 1 interagiu 1 vezes.\n"));
}

#[test]
fn test_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("log.txt");

    let err = InteractionLedger::new().export(&path).unwrap_err();

    assert!(matches!(err, SimulationError::Io(_)));
}

#[test]
fn test_environment_export_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_LOG_PATH);
    let config = SimConfig::default();

    let agents = vec![
        Agent::new("Macaco 2".to_owned(), 250.0, 250.0, SymbolTable::from_weights([0.3; 10]), &config),
        Agent::new("Macaco 1".to_owned(), 700.0, 500.0, SymbolTable::from_weights([0.3; 10]), &config),
    ];
    let mut environment = Environment::with_agents(&config, agents);
    environment.resolve_perception();

    environment.export_log(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "Macaco 2 interagiu 3 vezes.");
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = SimConfig {
        n_agents: 12,
        reinforce_alarms: true,
        ..SimConfig::default()
    };
    config.save_to_file(&path).expect("Failed to save config");

    let loaded = SimConfig::load_from_file(&path).expect("Failed to load config");
    assert_eq!(loaded.n_agents, 12);
    assert!(loaded.reinforce_alarms);
    assert_eq!(loaded.box_width, 800.0);
    assert_eq!(loaded.log_path, config.log_path);
}

#[test]
fn test_config_missing_fields_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "n_agents": 2, "predator_speed": 4.0 }"#).unwrap();

    let loaded = SimConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded.n_agents, 2);
    assert_eq!(loaded.predator_speed, 4.0);
    assert_eq!(loaded.agent_speed, 8.0);
    assert_eq!(loaded.target_fps, 60);
}

#[test]
fn test_config_invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "not json").unwrap();

    let err = SimConfig::load_from_file(&path).unwrap_err();

    assert!(matches!(err, SimulationError::Json(_)));
}

#[test]
fn test_config_arena_smaller_than_body_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "box_width": 12.0, "box_height": 12.0 }"#).unwrap();

    let err = SimConfig::load_from_file(&path).unwrap_err();

    assert!(matches!(err, SimulationError::InvalidConfig(_)));
}

#[test]
fn test_config_negative_speed_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "agent_speed": -1.0 }"#).unwrap();

    let err = SimConfig::load_from_file(&path).unwrap_err();

    assert!(matches!(err, SimulationError::InvalidConfig(_)));
}

#[test]
fn test_config_arena_exactly_body_size_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "box_width": 15.0, "box_height": 15.0 }"#).unwrap();

    let loaded = SimConfig::load_from_file(&path).unwrap();

    assert_eq!(loaded.box_width, 15.0);
    assert!(SimConfig::default().validate().is_ok());
}
