use std::process::{exit, Command, Stdio};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the proximity search workspace",
    long_about = "A unified CLI for running the demo, the search CLI, benchmarks,\n\
                  load tests and CI checks in the proximity search workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the nearest-worker demo
    Demo,
    /// Run the search CLI against a candidates file
    Search {
        /// JSON array of workers
        #[arg(long)]
        candidates: String,
        /// Extra arguments passed through to `proximity`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Benchmark uncommitted changes against HEAD for one Criterion group
    BenchCompare {
        /// Name the HEAD measurements are saved under
        #[arg(long, default_value = "head")]
        baseline: String,
        /// Criterion filter selecting the benchmarks to compare
        #[arg(long, default_value = "proximity_search")]
        group: String,
    },
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run load tests (ignored tests in proximity_core)
    LoadTest,
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the demo
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

/// Run `program`, exiting with its status code on failure.
fn run(program: &str, args: &[&str]) {
    eprintln!("+ {program} {}", args.join(" "));
    let status = Command::new(program)
        .args(args)
        .status()
        .unwrap_or_else(|err| panic!("failed to execute {program}: {err}"));
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_cargo(args: &[&str]) {
    run("cargo", args);
}

/// True when `git status` reports tracked or untracked changes.
fn worktree_dirty() -> bool {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .stderr(Stdio::inherit())
        .output()
        .expect("failed to execute git");
    !output.stdout.is_empty()
}

fn run_bench(extra: &[&str]) {
    let mut args = vec!["bench", "--package", "proximity_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test proximity_core");
    run_cargo(&["test", "-p", "proximity_core"]);

    step("Test proximity_cli");
    run_cargo(&["test", "-p", "proximity_cli"]);
}

fn ci_examples() {
    step("Run nearest_worker demo");
    run_cargo(&["run", "-p", "proximity_core", "--example", "nearest_worker"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_bench(&[]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            run_cargo(&["run", "-p", "proximity_core", "--example", "nearest_worker"]);
        }
        Commands::Search { candidates, rest } => {
            let mut args = vec!["run", "-p", "proximity_cli", "--", "--candidates", candidates.as_str()];
            args.extend(rest.iter().map(String::as_str));
            run_cargo(&args);
        }
        Commands::Bench => run_bench(&[]),
        Commands::BenchCompare { baseline, group } => {
            if !worktree_dirty() {
                eprintln!("No local changes; nothing to compare against HEAD.");
                return;
            }

            // A failing HEAD run exits with the changes still stashed.
            step("Stashing local changes");
            run(
                "git",
                &["stash", "push", "--include-untracked", "-m", "xtask bench-compare"],
            );

            step(&format!("Measuring {group} at HEAD as '{baseline}'"));
            run_bench(&[group.as_str(), "--save-baseline", baseline.as_str()]);

            step("Restoring local changes");
            run("git", &["stash", "pop"]);

            step(&format!("Measuring {group} against '{baseline}'"));
            run_bench(&[group.as_str(), "--baseline", baseline.as_str()]);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::LoadTest => {
            run_cargo(&[
                "test",
                "-p",
                "proximity_core",
                "--test",
                "load_tests",
                "--",
                "--ignored",
            ]);
        }
    }
}
