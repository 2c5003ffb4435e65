//! `f1data` command-line tool.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use f1_cli::commands::{
    ErgastSource, parse_season_filter, run_ergast, run_import, run_paste, run_race, run_races,
    run_standings, run_templates,
};
use f1_cli::config::F1Config;
use f1_cli::logging::{LogConfig, LogFormat, init_logging};
use f1_cli::summary::{
    print_export, print_import, print_paste, print_race, print_races, print_standings,
    print_templates,
};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, ErgastArgs, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = F1Config::load(cli.config.as_deref())?
        .with_data_dir(cli.data_dir)
        .with_store_dir(cli.store_dir);

    match cli.command {
        Command::Templates(args) => {
            print_templates(&run_templates(&config, args.season, args.rounds)?);
        }
        Command::Paste(args) => {
            let result = run_paste(&config, args.season, args.round, args.input.as_deref())?;
            print_paste(&result);
        }
        Command::Ergast(args) => {
            let source = ergast_source(&args);
            let config = config.with_ergast_base_url(args.base_url);
            print_export(&run_ergast(&config, args.season, &source)?);
        }
        Command::Import(args) => {
            let result = run_import(&config, args.season)?;
            print_import(&result);
            if result.has_errors {
                return Ok(1);
            }
        }
        Command::Races(args) => {
            let season = parse_season_filter(args.season.as_deref());
            print_races(&run_races(&config, season)?);
        }
        Command::Race(args) => {
            print_race(&run_race(&config, args.season, args.round)?);
        }
        Command::Standings(args) => {
            print_standings(&run_standings(&config, args.season)?);
        }
    }
    Ok(0)
}

fn ergast_source(args: &ErgastArgs) -> ErgastSource {
    match &args.schedule {
        Some(schedule) => ErgastSource::Files {
            schedule: schedule.clone(),
            results: args.results.clone(),
        },
        None => ErgastSource::Http {
            timeout: Duration::from_secs(args.timeout),
        },
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
