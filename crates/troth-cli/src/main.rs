// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The `troth` binary: solve a stable matching instance and audit the
//! result.
//!
//! Matching lines and the audit verdict go to stdout; diagnostics go to
//! stderr through `tracing`. A malformed instance file aborts with a
//! nonzero exit status before any matching is attempted, while audit
//! findings are ordinary output and exit successfully.

mod cli;

use crate::cli::{Cli, Commands};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use troth_da::da::DaSolver;
use troth_da::monitor::log::ProposalLogMonitor;
use troth_model::generate::InstanceGenerator;
use troth_model::loading::{self, InstanceLoader};
use troth_verify::audit::MatchAuditor;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Diagnostics go to stderr so stdout carries nothing but the matching
    // and the audit verdict.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Gen {
            agents,
            seed,
            output,
        }) => run_generate(agents, seed, output.as_deref()),
        None => run_match(cli.test, &cli.data_dir, cli.trace),
    }
}

/// Loads the requested instance, solves it, and audits the result.
fn run_match(test: Option<String>, data_dir: &Path, trace: bool) -> anyhow::Result<()> {
    let requested = match test {
        Some(id) => id,
        None => prompt_for_test()?,
    };
    let path = resolve_instance_path(&requested, data_dir);

    let load_start = Instant::now();
    let instance = InstanceLoader::new()
        .with_comment_lines(true)
        .from_path(&path)
        .with_context(|| format!("failed to load instance {}", path.display()))?;
    debug!(
        "loaded {} agents per side from {} in {:.2?}",
        instance.num_agents(),
        path.display(),
        load_start.elapsed()
    );

    let mut solver = DaSolver::preallocated(instance.num_agents());
    let outcome = if trace {
        solver.solve_with_monitor(&instance, ProposalLogMonitor::new())
    } else {
        solver.solve(&instance)
    };
    let statistics = outcome.statistics();
    info!(
        "matched {} agents with {} proposals in {:.2?}",
        instance.num_agents(),
        statistics.proposals,
        statistics.time_total
    );

    print!("{}", outcome.matching());

    let audit_start = Instant::now();
    let report = MatchAuditor::new(&instance).audit(outcome.matching());
    debug!("audit finished in {:.2?}", audit_start.elapsed());

    // Audit findings are the program's verdict, not an error condition.
    print!("{}", report);
    Ok(())
}

/// Generates a random instance and writes it to a file or stdout.
fn run_generate(agents: usize, seed: Option<u64>, output: Option<&Path>) -> anyhow::Result<()> {
    anyhow::ensure!(agents >= 1, "at least one agent per side is required");

    let mut generator = InstanceGenerator::new(agents);
    if let Some(seed) = seed {
        generator = generator.with_seed(seed);
    }
    let instance = generator.generate();

    match output {
        Some(path) => {
            loading::write_instance_to_path(&instance, path)
                .with_context(|| format!("failed to write instance {}", path.display()))?;
            info!("wrote {} agents per side to {}", agents, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            loading::write_instance(&instance, &mut stdout)
                .context("failed to write instance to stdout")?;
        }
    }
    Ok(())
}

/// Asks on stdin which test instance to run.
fn prompt_for_test() -> anyhow::Result<String> {
    print!("Enter the test number to run (e.g., 1 for test1): ");
    std::io::stdout()
        .flush()
        .context("failed to flush the prompt")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read the test number from stdin")?;
    Ok(line.trim().to_string())
}

/// Maps a requested test id to an instance file path.
///
/// Identifiers that are not numbers, and numbers whose file does not
/// exist, fall back to `test1` with a printed note. The fallback file
/// itself may still be missing; that surfaces as a load error.
fn resolve_instance_path(requested: &str, data_dir: &Path) -> PathBuf {
    let name = match requested.trim().parse::<u32>() {
        Ok(number) => format!("test{}", number),
        Err(_) => {
            println!("Invalid input, defaulting to test1. Please enter an integer.");
            String::from("test1")
        }
    };

    let path = data_dir.join(format!("{}.txt", name));
    if name != "test1" && !path.exists() {
        println!("Test file '{}' not found. Defaulting to test1.", path.display());
        return data_dir.join("test1.txt");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_numeric_id() {
        // Resolution of a numeric id never touches the filesystem for
        // test1, so the path comes back untouched.
        let path = resolve_instance_path("1", Path::new("data"));
        assert_eq!(path, PathBuf::from("data/test1.txt"));
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let path = resolve_instance_path(" 1\n", Path::new("data"));
        assert_eq!(path, PathBuf::from("data/test1.txt"));
    }

    #[test]
    fn test_resolve_non_numeric_falls_back() {
        let path = resolve_instance_path("abc", Path::new("data"));
        assert_eq!(path, PathBuf::from("data/test1.txt"));
    }

    #[test]
    fn test_resolve_missing_file_falls_back() {
        let path = resolve_instance_path("987654", Path::new("data"));
        assert_eq!(path, PathBuf::from("data/test1.txt"));
    }
}
