use std::path::PathBuf;

use clap::Parser;
use codec_eac3::options::{DEFAULT_MAX_HELD_FRAMES, DEFAULT_SAMPLE_FRAMES};

/// Force the 7.1 channel map of E-AC-3 JOC dependent substreams
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
pub(crate) struct AppCli {
    #[arg(short, long, value_name = "INPUT")]
    pub(crate) input: PathBuf,
    #[arg(short, long, value_name = "OUTPUT")]
    pub(crate) output: PathBuf,
    /// dependent frames that must agree on the channel map position
    #[arg(long, value_name = "FRAMES", default_value_t = DEFAULT_SAMPLE_FRAMES)]
    pub(crate) sample_frames: usize,
    /// frames buffered while sampling before giving up on detection
    #[arg(long, value_name = "FRAMES", default_value_t = DEFAULT_MAX_HELD_FRAMES)]
    pub(crate) max_held_frames: usize,
    #[arg(long, value_name = "LOG_LEVEL", default_value = "info")]
    pub(crate) log_level: String,
    /// print the run report as json on stdout
    #[arg(long)]
    pub(crate) json: bool,
}
