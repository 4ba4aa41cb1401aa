use std::{fs, path::PathBuf};

use codec_eac3::options::PatchOptions;

use crate::{
    cli::AppCli,
    errors::{AppError, AppResult},
    util::parse_log_level,
};

#[derive(Debug)]
pub(crate) struct AppConfig {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) log_level: tracing::Level,
    pub(crate) json: bool,
    pub(crate) options: PatchOptions,
}

impl AppConfig {
    pub(crate) fn new(cli_args: AppCli) -> AppResult<Self> {
        let log_level = parse_log_level(&cli_args.log_level)?;
        let config = Self {
            input: cli_args.input,
            output: cli_args.output,
            log_level,
            json: cli_args.json,
            options: PatchOptions {
                sample_frames: cli_args.sample_frames,
                max_held_frames: cli_args.max_held_frames,
                ..Default::default()
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        if self.input.as_os_str().is_empty() || self.output.as_os_str().is_empty() {
            return Err(AppError::ConfigError(
                "input and output paths must not be empty".to_owned(),
            ));
        }

        let same = match (fs::canonicalize(&self.input), fs::canonicalize(&self.output)) {
            (Ok(input), Ok(output)) => input == output,
            _ => self.input == self.output,
        };
        if same {
            return Err(AppError::SamePath(self.output.clone()));
        }

        self.options.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> AppCli {
        AppCli::try_parse_from(std::iter::once("eac3_atmos_fix").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_new_config() {
        let config = AppConfig::new(cli(&["-i", "in.ec3", "-o", "out.ec3", "--sample-frames", "2"]))
            .unwrap();
        assert_eq!(config.options.sample_frames, 2);
        assert_eq!(config.options.max_held_frames, 256);
        assert_eq!(config.options.channel_map, 0x1A00);
        assert_eq!(config.options.compression, 0xFF);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_same_path_rejected() {
        assert!(matches!(
            AppConfig::new(cli(&["-i", "same.ec3", "-o", "same.ec3"])),
            Err(AppError::SamePath(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AppConfig::new(cli(&["-i", "a", "-o", "b", "--sample-frames", "0"])),
            Err(AppError::Eac3(_))
        ));
        assert!(matches!(
            AppConfig::new(cli(&["-i", "a", "-o", "b", "--max-held-frames", "4"])),
            Err(AppError::Eac3(_))
        ));
        assert!(matches!(
            AppConfig::new(cli(&["-i", "a", "-o", "b", "--log-level", "verbose"])),
            Err(AppError::ConfigError(_))
        ));
    }
}
