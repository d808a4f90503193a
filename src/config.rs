use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::constants::{DEFAULT_INTERVAL_MS, DEFAULT_SLIDE_COUNT};

/// Command line of the carousel.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Cycles through slides on click or on a timer")]
pub struct Cli {
    /// Directory of images, one slide per image (numbered panels are shown otherwise)
    pub images: Option<PathBuf>,

    /// Number of placeholder slides when no image directory is given
    #[arg(long, default_value_t = DEFAULT_SLIDE_COUNT)]
    pub slides: usize,

    /// Auto-advance period in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Render offscreen and encode the frames into this video file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Full auto-advance cycles to capture with --record
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub cycles: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("slide count must be at least 1")]
    NoSlides,
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
}

/// Validated navigator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    slide_count: usize,
    interval: Duration,
}

impl Config {
    pub fn new(slide_count: usize, interval: Duration) -> Result<Self, ConfigError> {
        if slide_count == 0 {
            return Err(ConfigError::NoSlides);
        }
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(Self { slide_count, interval })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Same interval, different slide count (used once the images are loaded).
    pub fn with_slide_count(self, slide_count: usize) -> Result<Self, ConfigError> {
        Self::new(slide_count, self.interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slide_count: DEFAULT_SLIDE_COUNT,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Config::new(cli.slides, Duration::from_millis(cli.interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_instance() {
        let cli = Cli::try_parse_from(["carousel"]).unwrap();
        let config = Config::try_from(&cli).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.slide_count(), 12);
        assert_eq!(config.interval(), Duration::from_secs(10));
        assert!(cli.images.is_none());
        assert!(cli.record.is_none());
        assert_eq!(cli.cycles, 1);
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "carousel",
            "photos",
            "--slides",
            "5",
            "--interval-ms",
            "2500",
            "--record",
            "out.mp4",
            "--cycles",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.images, Some(PathBuf::from("photos")));
        assert_eq!(cli.record, Some(PathBuf::from("out.mp4")));
        assert_eq!(cli.cycles, 3);

        let config = Config::try_from(&cli).unwrap();
        assert_eq!(config.slide_count(), 5);
        assert_eq!(config.interval(), Duration::from_millis(2500));
    }

    #[test]
    fn rejects_zero_cycles() {
        assert!(Cli::try_parse_from(["carousel", "--cycles", "0"]).is_err());
    }

    #[test]
    fn rejects_empty_carousel() {
        assert_eq!(Config::new(0, Duration::from_secs(1)), Err(ConfigError::NoSlides));
    }

    #[test]
    fn rejects_zero_interval() {
        assert_eq!(Config::new(3, Duration::ZERO), Err(ConfigError::ZeroInterval));

        let cli = Cli::try_parse_from(["carousel", "--interval-ms", "0"]).unwrap();
        assert_eq!(Config::try_from(&cli), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn slide_count_override_keeps_interval() {
        let config = Config::new(12, Duration::from_millis(750)).unwrap();
        let images = config.with_slide_count(4).unwrap();

        assert_eq!(images.slide_count(), 4);
        assert_eq!(images.interval(), Duration::from_millis(750));
        assert_eq!(config.with_slide_count(0), Err(ConfigError::NoSlides));
    }
}
