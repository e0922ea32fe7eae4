//! Command-line front end for the maze search benchmark.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use maze_bench::{
    BatchReport, BenchConfig, BenchmarkRecord, ConfigError, Harness, Leaders, MetricSummary,
    MetricsReport, TrackingAllocator, default_grid,
};
use maze_core::{Grid, GridError};
use maze_paths::StrategyKind;
use serde::Serialize;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator::new();

#[derive(Parser, Debug)]
#[command(name = "mazebench")]
#[command(about = "Benchmark grid search strategies on a maze")]
#[command(version)]
struct Args {
    /// Benchmark configuration (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maze file ('#' walls, '.' open cells) replacing the built-in maze
    #[arg(short, long, global = true)]
    maze: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the configured test cases
    Cases,

    /// Run one strategy on one test case
    Run {
        /// Strategy (bfs, dfs, astar, greedy, annealing)
        #[arg(short, long)]
        strategy: StrategyKind,

        /// Test case id
        #[arg(short = 'n', long = "case")]
        case: u32,

        /// Random seed for simulated annealing
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run every strategy on every test case and summarise the results
    Analyze {
        /// Write records and metrics as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Random seed for simulated annealing
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read maze {}: {source}", path.display())]
    MazeIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid maze: {0}")]
    Maze(#[from] GridError),

    #[error("no test case with id {0}")]
    UnknownCase(u32),

    #[error("cannot create {}: {source}", path.display())]
    ExportIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    ExportJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    if let Some(maze) = args.maze {
        config.maze = Some(maze);
    }

    match args.command {
        Command::Cases => {
            print_cases(&config);
            Ok(ExitCode::SUCCESS)
        }
        Command::Run {
            strategy,
            case,
            seed,
        } => {
            let grid = load_grid(config.maze.as_deref())?;
            let test_case = *config.test_case(case).ok_or(CliError::UnknownCase(case))?;
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }
            config.strategies = vec![strategy];

            let mut harness = Harness::new(&grid, config).with_meter(&ALLOC);
            let Some(record) = harness.run_case(strategy, &test_case) else {
                return Ok(ExitCode::FAILURE);
            };
            print_record(&record);
            Ok(if record.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Analyze { json, seed } => {
            let grid = load_grid(config.maze.as_deref())?;
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }

            let report = Harness::new(&grid, config).with_meter(&ALLOC).run_batch();
            let metrics = report.metrics();
            let leaders = metrics.leaders();
            print_summary(&report, &metrics, &leaders);

            if let Some(path) = json {
                export_json(&path, &report, &metrics, &leaders)?;
                println!("\nWrote {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_grid(path: Option<&Path>) -> Result<Grid, CliError> {
    let Some(path) = path else {
        return Ok(default_grid()?);
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::MazeIo {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = Grid::parse(&text)?;
    log::info!(
        "loaded {}x{} maze from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

fn print_cases(config: &BenchConfig) {
    println!("{:<6} {:<10} {:<10}", "Case", "Start", "Goal");
    for case in &config.test_cases {
        println!(
            "{:<6} {:<10} {:<10}",
            case.id,
            case.start.to_string(),
            case.goal.to_string()
        );
    }
}

fn print_record(record: &BenchmarkRecord) {
    println!("Strategy:    {}", record.strategy);
    println!(
        "Test case:   {} ({} -> {})",
        record.test_case, record.start, record.goal
    );
    if let (Some(failure), Some(error)) = (record.failure, &record.error) {
        println!("Failed:      {failure}: {error}");
        return;
    }

    let result = &record.result;
    println!("Found:       {}", if result.found { "yes" } else { "no" });
    if result.found {
        println!("Steps:       {}", result.steps);
        let path: Vec<String> = result.path.iter().map(ToString::to_string).collect();
        println!("Path:        {}", path.join(" -> "));
    }
    if result.visited_reported() {
        println!("Visited:     {}", result.visited);
    }
    println!("Time:        {:.3} ms", record.wall_time_secs * 1000.0);
    println!(
        "Peak memory: {:.1} KB",
        record.peak_memory_bytes as f64 / 1024.0
    );
}

fn mean_std(s: &MetricSummary, scale: f64) -> String {
    match (s.mean, s.std) {
        (Some(mean), Some(std)) => format!("{:.2} ± {:.2}", mean * scale, std * scale),
        _ => "-".to_string(),
    }
}

fn print_summary(report: &BatchReport, metrics: &MetricsReport, leaders: &Leaders) {
    println!(
        "{:<20} {:>5} {:>9} {:>16} {:>18} {:>18}",
        "Strategy", "Runs", "Success", "Steps", "Time (ms)", "Memory (KB)"
    );
    println!("{}", "=".repeat(91));
    for s in metrics {
        let success = s
            .completeness
            .mean
            .map_or_else(|| "-".to_string(), |m| format!("{:.1}%", m * 100.0));
        println!(
            "{:<20} {:>5} {:>9} {:>16} {:>18} {:>18}",
            s.strategy,
            s.runs,
            success,
            mean_std(&s.cost_optimality, 1.0),
            mean_std(&s.time_complexity, 1000.0),
            mean_std(&s.space_complexity, 1.0 / 1024.0),
        );
    }

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        println!("\nFailed runs:");
        for r in failures {
            println!(
                "  {} case {}: {}",
                r.strategy,
                r.test_case,
                r.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    println!("\nKey findings:");
    if let Some(l) = &leaders.most_complete {
        println!(
            "  Most complete:         {} ({:.1}% success rate)",
            l.strategy,
            l.mean * 100.0
        );
    }
    if let Some(l) = &leaders.most_cost_optimal {
        println!(
            "  Most cost-optimal:     {} ({:.1} avg steps)",
            l.strategy, l.mean
        );
    }
    if let Some(l) = &leaders.fastest {
        println!(
            "  Fastest:               {} ({:.3} ms avg)",
            l.strategy,
            l.mean * 1000.0
        );
    }
    if let Some(l) = &leaders.most_memory_efficient {
        println!(
            "  Most memory-efficient: {} ({:.1} KB avg)",
            l.strategy,
            l.mean / 1024.0
        );
    }
}

#[derive(Serialize)]
struct Export<'a> {
    name: &'a str,
    records: &'a [BenchmarkRecord],
    metrics: &'a MetricsReport,
    leaders: &'a Leaders,
}

fn export_json(
    path: &Path,
    report: &BatchReport,
    metrics: &MetricsReport,
    leaders: &Leaders,
) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::ExportIo {
        path: path.to_path_buf(),
        source,
    })?;
    let export = Export {
        name: &report.name,
        records: &report.records,
        metrics,
        leaders,
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &export).map_err(|source| {
        CliError::ExportJson {
            path: path.to_path_buf(),
            source,
        }
    })
}
