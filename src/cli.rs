use crate::input::validate_numbers;
use crate::solver::Solver;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

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

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Reach a target value by combining source numbers with + - * /")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Source numbers, each usable at most once
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<i64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Two numbers is the minimum for any operation to be possible
    validate_numbers(&args.numbers).context("Invalid source numbers")?;

    Ok(CliConfig {
        target: args.target,
        numbers: args.numbers,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::new();

    info!(
        "Searching for a derivation of {} from {:?}",
        config.target, config.numbers
    );

    match solver.solve(config.target, &config.numbers) {
        Some(derivation) => {
            for step in &derivation {
                println!("{}", step);
            }
            Ok(())
        }
        None => {
            warn!("No derivation reaches the target");
            println!("No solution found :(");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_numbers_minimum() {
        let result = validate_numbers(&[25, 4]);
        assert!(result.is_ok());

        let result = validate_numbers(&[25]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["countdown", "952", "25", "50", "75", "100", "3", "6"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, 952);
            assert_eq!(args.numbers, vec![25, 50, 75, 100, 3, 6]);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_accept_negative_literals() {
        let args = CliArgs::try_parse_from(["countdown", "-5", "-3", "2"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, -5);
            assert_eq!(args.numbers, vec![-3, 2]);
        }
    }

    #[test]
    fn test_cli_args_require_numbers() {
        let args = CliArgs::try_parse_from(["countdown", "952"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_cli_args_reject_malformed_integers() {
        let args = CliArgs::try_parse_from(["countdown", "952", "25", "5o"]);
        assert!(args.is_err());

        let args = CliArgs::try_parse_from(["countdown", "9.5", "25", "50"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_single_number_fails_validation_not_parsing() {
        let args = CliArgs::try_parse_from(["countdown", "10", "10"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(validate_numbers(&args.numbers).is_err());
        }
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
