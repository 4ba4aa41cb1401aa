mod cli;
mod config;
mod errors;
mod util;

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use codec_eac3::pipeline::patch_stream;
use time::macros::format_description;
use tracing::{self, Dispatch, Level};
use tracing_subscriber::{self, EnvFilter, fmt::time::LocalTime};

use crate::{
    cli::AppCli,
    config::AppConfig,
    errors::{AppError, AppResult},
};

fn init_logger(level: Level) -> AppResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(level.as_str().to_lowercase()))
        .finish();
    tracing::dispatcher::set_global_default(Dispatch::new(subscriber))
        .map_err(|err| AppError::Logger(err.to_string()))
}

fn run(config: &AppConfig) -> AppResult<()> {
    let input = File::open(&config.input).map_err(|source| AppError::Io {
        path: config.input.clone(),
        source,
    })?;
    let output = File::create(&config.output).map_err(|source| AppError::Io {
        path: config.output.clone(),
        source,
    })?;

    tracing::info!(
        "patching {} -> {}",
        config.input.display(),
        config.output.display()
    );
    let report = patch_stream(
        BufReader::new(input),
        BufWriter::new(output),
        &config.options,
    )?;

    if let Some(location) = report.channel_map_location {
        tracing::info!("channel map bit position: {}", location.bit_offset);
    }
    tracing::info!(
        "{} dependent frames patched ({} rewritten, compr forced in {}), {} bytes written",
        report.patched_frames,
        report.rewritten_frames,
        report.compression_forced,
        report.bytes_out
    );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match AppConfig::new(AppCli::parse()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logger(config.log_level) {
        eprintln!("ERROR: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                AppError::Eac3(inner) => tracing::error!(
                    "run aborted at byte offset {:?}: {}",
                    inner.offset(),
                    inner
                ),
                other => tracing::error!("run aborted: {}", other),
            }
            ExitCode::FAILURE
        }
    }
}
