use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use countdown_solver::letters::{WORD_LIST_DEFAULT, find_words, load_word_list};
use countdown_solver::solver::constants::MAX_RESULTS_DEFAULT;
use countdown_solver::{ExpressionSolver, SolverConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the numbers and letters rounds
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Solve the numbers and letters rounds of Countdown")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub game: Game,

    /// Log level (default: warn)
    #[arg(short, long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Game {
    /// Reach a target using each number at most once
    Numbers {
        /// Target value to approach
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        target: i64,

        /// Numbers available to the expression
        #[arg(required = true, num_args = 1.., value_parser = clap::value_parser!(i64).range(1..))]
        numbers: Vec<i64>,

        /// Number of solutions to print
        #[arg(short, long, default_value_t = MAX_RESULTS_DEFAULT)]
        max_results: usize,

        /// Search on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Find the longest words spelt from the letters
    Letters {
        /// Letters available to each word
        letters: String,

        /// Number of words to print
        #[arg(short, long, default_value_t = MAX_RESULTS_DEFAULT)]
        max_results: usize,

        /// Word list, one word per line
        #[arg(short, long, default_value = WORD_LIST_DEFAULT)]
        word_list: PathBuf,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    match args.game {
        Game::Numbers {
            target,
            numbers,
            max_results,
            sequential,
        } => run_numbers(target, &numbers, max_results, !sequential),
        Game::Letters {
            letters,
            max_results,
            word_list,
        } => run_letters(&letters, max_results, &word_list),
    }
}

fn run_numbers(target: i64, numbers: &[i64], max_results: usize, parallel: bool) -> Result<()> {
    let solver = ExpressionSolver::new(SolverConfig {
        max_results,
        parallel,
    });
    let solutions = solver
        .solve(target, numbers)
        .context("Invalid numbers round")?;

    let mut out = io::stdout().lock();
    for solution in &solutions {
        writeln!(out, "{}", solution)?;
    }
    Ok(())
}

fn run_letters(letters: &str, max_results: usize, word_list: &Path) -> Result<()> {
    let words = load_word_list(word_list)?;
    info!("Using word list {}", word_list.display());

    let matches = find_words(&words, letters, max_results).context("Invalid letters round")?;

    let mut out = io::stdout().lock();
    for word in &matches {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_args_parsing() {
        let args = CliArgs::try_parse_from(["countdown", "numbers", "342", "1", "3", "7", "10"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Warn));
            match args.game {
                Game::Numbers {
                    target,
                    numbers,
                    max_results,
                    sequential,
                } => {
                    assert_eq!(target, 342);
                    assert_eq!(numbers, vec![1, 3, 7, 10]);
                    assert_eq!(max_results, MAX_RESULTS_DEFAULT);
                    assert!(!sequential);
                }
                Game::Letters { .. } => panic!("expected the numbers round"),
            }
        }
    }

    #[test]
    fn test_numbers_args_options() {
        let args = CliArgs::try_parse_from([
            "countdown",
            "numbers",
            "-m",
            "5",
            "--sequential",
            "100",
            "25",
            "4",
            "--log-level",
            "debug",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Debug));
            assert!(matches!(
                args.game,
                Game::Numbers {
                    target: 100,
                    max_results: 5,
                    sequential: true,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_numbers_args_rejected() {
        assert!(CliArgs::try_parse_from(["countdown", "numbers", "100"]).is_err());
        assert!(CliArgs::try_parse_from(["countdown", "numbers", "0", "5"]).is_err());
        assert!(CliArgs::try_parse_from(["countdown", "numbers", "100", "5", "-3"]).is_err());
        assert!(CliArgs::try_parse_from(["countdown", "numbers", "100", "five"]).is_err());
    }

    #[test]
    fn test_letters_args_parsing() {
        let args = CliArgs::try_parse_from(["countdown", "letters", "taerxt"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            match args.game {
                Game::Letters {
                    letters,
                    max_results,
                    word_list,
                } => {
                    assert_eq!(letters, "taerxt");
                    assert_eq!(max_results, MAX_RESULTS_DEFAULT);
                    assert_eq!(word_list, PathBuf::from("yawl.txt"));
                }
                Game::Numbers { .. } => panic!("expected the letters round"),
            }
        }

        let args = CliArgs::try_parse_from(["countdown", "letters", "abc", "-w", "words.txt"]);
        assert!(matches!(
            args,
            Ok(CliArgs { game: Game::Letters { word_list, .. }, .. })
                if word_list == PathBuf::from("words.txt")
        ));
    }

    #[test]
    fn test_missing_game_rejected() {
        assert!(CliArgs::try_parse_from(["countdown"]).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
