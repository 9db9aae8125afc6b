#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use alarm_calls::simulation::agent::{Agent, SYMBOL_COUNT, SYMBOL_INCREMENT, Species, SymbolTable};
use alarm_calls::simulation::error::SimulationError;
use alarm_calls::simulation::params::SimConfig;
use alarm_calls::simulation::predator::{Predator, PredatorKind, Rgba};

fn monkey(weights: [f64; SYMBOL_COUNT]) -> Agent {
    Agent::new(
        "Macaco 1".to_owned(),
        400.0,
        300.0,
        SymbolTable::from_weights(weights),
        &SimConfig::default(),
    )
}

#[test]
fn test_increase_symbol_value_only_touches_index() {
    let mut agent = monkey([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.0]);
    let before = agent.symbols.weights().clone();

    agent.increase_symbol_value(4).unwrap();

    let after = agent.symbols.weights();
    assert!((after[4] - before[4] - SYMBOL_INCREMENT).abs() < 1e-12);
    assert!(after[4] > before[4]);
    for i in (0..SYMBOL_COUNT).filter(|&i| i != 4) {
        assert_eq!(after[i], before[i], "weight {i} changed");
    }
}

#[test]
fn test_increase_symbol_value_rejects_out_of_range() {
    let mut agent = monkey([0.5; SYMBOL_COUNT]);
    let before = agent.symbols.clone();

    let err = agent.increase_symbol_value(SYMBOL_COUNT).unwrap_err();

    assert!(matches!(
        err,
        SimulationError::SymbolIndexOutOfRange { index: 10, len: 10 }
    ));
    assert_eq!(agent.symbols, before);
}

#[test]
fn test_trigger_alarm_picks_max_symbol() {
    let config = SimConfig::default();
    let agent = monkey([0.1, 0.2, 0.9, 0.4, 0.5, 0.6, 0.7, 0.8, 0.3, 0.0]);
    let predator = Predator::new(3, PredatorKind::Tiger, 400.0, 300.0, &config);

    let alarm = agent.trigger_alarm(&predator);

    assert_eq!(alarm.symbol, 2);
    assert_eq!(alarm.agent, "Macaco 1");
    assert_eq!(alarm.predator, PredatorKind::Tiger);
    assert_eq!(alarm.predator_id, 3);
}

#[test]
fn test_trigger_alarm_ties_go_to_lowest_index() {
    let config = SimConfig::default();
    let agent = monkey([0.2, 0.7, 0.1, 0.7, 0.0, 0.7, 0.3, 0.3, 0.3, 0.3]);
    let predator = Predator::new(1, PredatorKind::Eagle, 400.0, 300.0, &config);

    assert_eq!(agent.trigger_alarm(&predator).symbol, 1);

    let flat = monkey([0.4; SYMBOL_COUNT]);
    assert_eq!(flat.trigger_alarm(&predator).symbol, 0);
}

#[test]
fn test_reinforcement_can_change_the_chosen_symbol() {
    let config = SimConfig::default();
    let predator = Predator::new(2, PredatorKind::Snake, 400.0, 300.0, &config);
    let mut agent = monkey([0.5, 0.45, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    assert_eq!(agent.trigger_alarm(&predator).symbol, 0);
    agent.increase_symbol_value(1).unwrap();
    assert_eq!(agent.trigger_alarm(&predator).symbol, 1);
}

#[test]
fn test_appearance_follows_kind_and_species() {
    let config = SimConfig::default();
    let colours: Vec<Rgba> = PredatorKind::ALL
        .iter()
        .map(|&kind| Predator::new(1, kind, 0.0, 0.0, &config).color)
        .collect();

    assert_eq!(
        colours,
        vec![
            Rgba::new(255, 0, 0, 255),
            Rgba::new(255, 255, 255, 255),
            Rgba::new(0, 0, 255, 255),
        ]
    );
    let look = Species::Monkey.appearance(&config);
    assert_eq!(look.color, Rgba::new(0, 255, 0, 255));
    assert_eq!(look.size, config.agent_size);
}
