//! Warren headless generation harness.
//!
//! Validates layout generation without an engine: runs every scenario
//! from the manifest, checks the layout invariants, verifies seed
//! determinism, and sweeps seeds for stability. No rendering, no I/O
//! beyond the report.
//!
//! Usage:
//!   cargo run -p warren-simtest
//!   cargo run -p warren-simtest -- --verbose

use serde::Deserialize;

use warren_logic::config::LevelConfig;
use warren_logic::level::{generate, Level};
use warren_logic::placement::RecordedPlacements;
use warren_logic::random::seeded;
use warren_logic::section::SectionKind;
use warren_logic::validate::{check_level, Severity};

// ── Scenario manifest ───────────────────────────────────────────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    level_width: i32,
    level_length: i32,
    room_size_threshold: i32,
    cell_size: f32,
    seed: u64,
}

impl Scenario {
    fn config(&self) -> LevelConfig {
        LevelConfig {
            level_width: self.level_width,
            level_length: self.level_length,
            room_size_threshold: self.room_size_threshold,
            cell_size: self.cell_size,
            seed: Some(self.seed),
        }
    }
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Warren Generation Harness ===\n");

    let mut results = Vec::new();

    // 1. Scenario manifest generation + invariants
    results.extend(validate_scenarios(verbose));

    // 2. Seed determinism
    results.extend(validate_determinism());

    // 3. Configuration rejection
    results.extend(validate_config_rejection());

    // 4. Seed sweep for invariant stability
    results.extend(validate_seed_sweep(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn run_scenario(scenario: &Scenario) -> Result<Level, String> {
    let config = scenario.config();
    let mut sampler = seeded(scenario.seed);
    let mut sink = RecordedPlacements::new();
    generate(&config, &mut sampler, &mut sink).map_err(|errors| format!("{errors:?}"))
}

// ── 1. Scenarios ────────────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "scenarios_not_empty".into(),
        passed: !scenarios.is_empty(),
        detail: format!("{} scenarios loaded", scenarios.len()),
    });

    for scenario in &scenarios {
        let level = match run_scenario(scenario) {
            Ok(level) => level,
            Err(detail) => {
                results.push(TestResult {
                    name: format!("scenario_{}", scenario.name),
                    passed: false,
                    detail,
                });
                continue;
            }
        };

        let findings = check_level(&level);
        let errors = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warnings = findings.len() - errors;
        let hallways = level
            .sections()
            .iter()
            .filter(|s| s.kind == SectionKind::Hallway)
            .count();

        results.push(TestResult {
            name: format!("scenario_{}", scenario.name),
            passed: errors == 0 && !level.room_ids().is_empty(),
            detail: format!(
                "{} rooms, {} hallway cells, {} empty cells, {} errors, {} warnings",
                level.room_ids().len(),
                hallways,
                level.grid().empty_cells(),
                errors,
                warnings
            ),
        });

        if verbose && level.grid().width() <= 40 {
            println!("{}", level.dump());
        }
    }

    results
}

// ── 2. Determinism ──────────────────────────────────────────────────────

fn validate_determinism() -> Vec<TestResult> {
    println!("--- Determinism ---");
    let mut results = Vec::new();

    let config = LevelConfig::default();
    let run = |seed: u64| {
        let mut sink = RecordedPlacements::new();
        let level = generate(&config, &mut seeded(seed), &mut sink)
            .expect("default config must generate");
        (level.dump(), sink.tiles)
    };

    let (dump_a, tiles_a) = run(42);
    let (dump_b, tiles_b) = run(42);
    results.push(TestResult {
        name: "same_seed_identical_dump".into(),
        passed: dump_a == dump_b,
        detail: "two runs with seed 42".into(),
    });
    results.push(TestResult {
        name: "same_seed_identical_placements".into(),
        passed: tiles_a == tiles_b,
        detail: format!("{} placements compared", tiles_a.len()),
    });

    let (dump_c, _) = run(43);
    results.push(TestResult {
        name: "different_seed_differs".into(),
        passed: dump_a != dump_c,
        detail: "seed 42 vs 43".into(),
    });

    results
}

// ── 3. Configuration rejection ──────────────────────────────────────────

fn validate_config_rejection() -> Vec<TestResult> {
    println!("--- Config rejection ---");
    let mut results = Vec::new();

    let bad = LevelConfig {
        level_width: 0,
        level_length: -10,
        ..LevelConfig::default()
    };
    let mut sink = RecordedPlacements::new();
    let outcome = generate(&bad, &mut seeded(0), &mut sink);
    results.push(TestResult {
        name: "degenerate_dimensions_rejected".into(),
        passed: outcome.is_err() && sink.tiles.is_empty(),
        detail: "0×-10 grid refused before any placement".into(),
    });

    let odd = LevelConfig {
        level_width: 151,
        level_length: 151,
        ..LevelConfig::default()
    };
    let level = generate(&odd, &mut seeded(0), &mut RecordedPlacements::new());
    results.push(TestResult {
        name: "odd_dimensions_adjusted".into(),
        passed: level
            .map(|l| l.grid().width() == 150 && l.grid().length() == 150)
            .unwrap_or(false),
        detail: "151×151 becomes 150×150".into(),
    });

    results
}

// ── 4. Seed sweep ───────────────────────────────────────────────────────

fn validate_seed_sweep(verbose: bool) -> Vec<TestResult> {
    println!("--- Seed sweep ---");
    let mut results = Vec::new();

    let config = LevelConfig {
        level_width: 80,
        level_length: 80,
        ..LevelConfig::default()
    };

    let mut failures = 0usize;
    let mut incomplete_walks = 0usize;
    let sweep = 25u64;
    for seed in 0..sweep {
        let mut sink = RecordedPlacements::new();
        let level = match generate(&config, &mut seeded(seed), &mut sink) {
            Ok(level) => level,
            Err(_) => {
                failures += 1;
                continue;
            }
        };
        incomplete_walks += level.carve_stats().incomplete.len();
        let errors = check_level(&level)
            .into_iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        if errors > 0 {
            failures += 1;
            if verbose {
                println!("  seed {seed}: {errors} invariant errors");
            }
        }
    }

    results.push(TestResult {
        name: "seed_sweep_invariants".into(),
        passed: failures == 0,
        detail: format!("{sweep} seeds on 80×80, {failures} failures"),
    });
    results.push(TestResult {
        name: "seed_sweep_walks_terminate".into(),
        passed: true,
        detail: format!("{incomplete_walks} walks hit the redirect cap"),
    });

    results
}
