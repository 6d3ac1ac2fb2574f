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

//! Command line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solve a stable matching instance and audit the result.
#[derive(Parser, Debug)]
#[command(name = "troth")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Number of the test instance to run (for example 1 for test1)
    pub test: Option<String>,

    /// Directory holding the test instance files
    #[arg(long, default_value = "data", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Print a table of every proposal the solver makes
    #[arg(long)]
    pub trace: bool,

    /// Enable verbose diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random instance in the plain-text exchange format
    Gen {
        /// Number of agents per side
        #[arg(short, long, default_value = "8")]
        agents: usize,

        /// Seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file path; writes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["troth"]).unwrap();
        assert_eq!(cli.test, None);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert!(!cli.trace);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_test_id() {
        let cli = Cli::try_parse_from(["troth", "3"]).unwrap();
        assert_eq!(cli.test.as_deref(), Some("3"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_trace_and_data_dir() {
        let cli =
            Cli::try_parse_from(["troth", "2", "--trace", "--data-dir", "fixtures"]).unwrap();
        assert_eq!(cli.test.as_deref(), Some("2"));
        assert!(cli.trace);
        assert_eq!(cli.data_dir, PathBuf::from("fixtures"));
    }

    #[test]
    fn test_parse_gen_subcommand() {
        let cli = Cli::try_parse_from([
            "troth", "gen", "--agents", "12", "--seed", "7", "--output", "out.txt",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Gen {
                agents,
                seed,
                output,
            }) => {
                assert_eq!(agents, 12);
                assert_eq!(seed, Some(7));
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            _ => panic!("expected gen subcommand"),
        }
    }

    #[test]
    fn test_parse_gen_defaults() {
        let cli = Cli::try_parse_from(["troth", "gen"]).unwrap();

        match cli.command {
            Some(Commands::Gen {
                agents,
                seed,
                output,
            }) => {
                assert_eq!(agents, 8);
                assert_eq!(seed, None);
                assert_eq!(output, None);
            }
            _ => panic!("expected gen subcommand"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["troth", "gen", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_test_id_conflicts_with_subcommand() {
        assert!(Cli::try_parse_from(["troth", "3", "gen"]).is_err());
    }
}
