use std::path::Path;
use std::time::Duration;

use maze_bench::{BenchConfig, ConfigError};
use maze_core::Position;
use maze_paths::StrategyKind;

#[test]
fn full_toml_file() {
    let config = BenchConfig::from_toml_str(
        r#"
        name = "nightly"
        strategies = ["astar", "greedy", "annealing"]
        seed = 42
        max_expansions = 10000
        timeout_ms = 500
        maze = "mazes/large.txt"

        [annealing]
        max_iterations = 5000
        initial_temperature = 50.0
        cooling_rate = 0.99

        [[test_cases]]
        id = 1
        start = { row = 1, col = 1 }
        goal = { row = 13, col = 13 }

        [[test_cases]]
        id = 2
        start = { row = 1, col = 5 }
        goal = { row = 13, col = 9 }
        "#,
    )
    .unwrap();

    assert_eq!(config.name, "nightly");
    assert_eq!(
        config.strategies,
        vec![
            StrategyKind::AStar,
            StrategyKind::GreedyBestFirst,
            StrategyKind::SimulatedAnnealing
        ]
    );
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.max_expansions, Some(10_000));
    assert_eq!(config.timeout(), Some(Duration::from_millis(500)));
    assert_eq!(config.maze.as_deref(), Some(Path::new("mazes/large.txt")));
    assert_eq!(config.annealing.max_iterations, 5000);
    assert_eq!(config.annealing.cooling_rate, 0.99);
    assert_eq!(config.test_cases.len(), 2);
    assert_eq!(config.test_case(2).unwrap().goal, Position::new(13, 9));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = BenchConfig::load("/nonexistent/bench.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = BenchConfig::from_toml_str("seed = \"soon\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("TOML parse error"));
}
