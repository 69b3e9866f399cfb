use passlab::sim::{HISTORY_LEN, hardware};
use passlab::{
    AttackMethod, AttackSimulator, GenerationConfig, SimulationConfig, SimulationState,
    generate_charset_password, generate_word_password,
};

fn lowercase_four() -> AttackSimulator {
    let config = SimulationConfig::new(4, 26, AttackMethod::sequential(), hardware::baseline());
    AttackSimulator::new(config).unwrap()
}

#[test]
fn four_lowercase_on_half_a_million_hashes() {
    let mut sim = lowercase_four();
    let model = *sim.model();
    assert_eq!(model.search_space, 456_976.0);
    assert_eq!(model.effective_speed, 250_000.0);
    assert!((model.estimated_completion_seconds - 1.8279).abs() < 1e-3);

    sim.start(100.0);
    let halfway = sim.tick(100.9);
    assert_eq!(halfway.state, SimulationState::Running);
    assert!(halfway.progress_percent < 100.0);

    let done = sim.tick(103.0);
    assert_eq!(done.state, SimulationState::Complete);
    assert_eq!(done.attempts, done.search_space);
    assert_eq!(done.progress_percent, 100.0);

    // Frozen once complete.
    let later = sim.tick(500.0);
    assert_eq!(later.elapsed_seconds, done.elapsed_seconds);
}

#[test]
fn reset_returns_to_idle_with_empty_history() {
    let mut sim = lowercase_four();
    sim.start(0.0);
    for i in 1..=5 {
        sim.tick(i as f64 * 0.1);
    }
    assert_eq!(sim.history().len(), 5);

    sim.reset();
    let snap = sim.snapshot();
    assert_eq!(snap.state, SimulationState::Idle);
    assert_eq!(snap.elapsed_seconds, 0.0);
    assert_eq!(snap.attempts, 0.0);
    assert!(sim.history().is_empty());
}

#[test]
fn history_keeps_last_thirty() {
    let mut sim = lowercase_four();
    sim.start(0.0);
    for i in 1..=100 {
        sim.tick(i as f64 * 0.001);
    }
    assert_eq!(sim.history().len(), HISTORY_LEN);
    let first = sim.history().iter().next().unwrap().elapsed_seconds;
    assert!((first - 0.071).abs() < 1e-9);
}

#[test]
fn dictionary_attack_covers_less_ground() {
    let sequential = lowercase_four();
    let config = SimulationConfig::new(4, 26, AttackMethod::dictionary(), hardware::baseline());
    let dictionary = AttackSimulator::new(config).unwrap();
    assert!(dictionary.model().search_space < sequential.model().search_space);
    assert!(
        dictionary.model().estimated_completion_seconds
            < sequential.model().estimated_completion_seconds
    );
}

#[test]
fn simulating_a_generated_password() {
    let password = generate_charset_password(&GenerationConfig::default().length(12)).unwrap();
    let config = SimulationConfig::for_password(
        &password,
        AttackMethod::hybrid(),
        hardware::find("cluster").unwrap(),
    );
    let mut sim = AttackSimulator::new(config).unwrap();
    sim.start(0.0);
    let snap = sim.tick(60.0);
    assert_eq!(snap.state, SimulationState::Running);
    assert!(snap.attempts > 0.0);
    assert!(snap.energy_kwh > 0.0);

    let summary = sim.summary();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["method"], "hybrid");
    assert_eq!(json["hardware"]["id"], "cluster");
    assert_eq!(json["snapshot"]["state"], "running");
}

#[test]
fn passphrase_target_covers_the_drawn_words() {
    let config = GenerationConfig::default().words(4).with_numbers(true);
    let password = generate_word_password(&config).unwrap();
    let target = SimulationConfig::for_password(
        &password,
        AttackMethod::sequential(),
        hardware::baseline(),
    );
    assert_eq!(target.password_length, 4);
    assert_eq!(target.alphabet_size, password.alphabet_size());

    let sim = AttackSimulator::new(target).unwrap();
    let keyspace_bits = sim.model().search_space.log2();
    let suffix_bits = password.entropy_bits() - keyspace_bits;
    assert!((suffix_bits - 900f64.log2()).abs() < 1e-6, "{suffix_bits}");
}
