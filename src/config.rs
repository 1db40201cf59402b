//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::model::{DEFAULT_BARS, DEFAULT_PAGE_SIZE, PAGE_SIZES};

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/music";

#[derive(Parser, Debug, Clone)]
#[command(name = "music-explorer", about = "Terminal explorer for a music catalog search service")]
pub struct Args {
    /// Base URL of the music search API
    #[arg(long, env = "MUSIC_EXPLORER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds
    #[arg(long, env = "MUSIC_EXPLORER_TIMEOUT_SECS", default_value_t = 10,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Items per page (10, 20 or 50)
    #[arg(long, env = "MUSIC_EXPLORER_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE,
          value_parser = parse_page_size)]
    pub page_size: u32,

    /// Number of visualizer bars
    #[arg(long, env = "MUSIC_EXPLORER_BARS", default_value_t = DEFAULT_BARS,
          value_parser = parse_bars)]
    pub bars: usize,

    /// Visualizer frames per second
    #[arg(long, env = "MUSIC_EXPLORER_FPS", default_value_t = 30,
          value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,

    /// Hide the visualizer strip
    #[arg(long, env = "MUSIC_EXPLORER_NO_VISUALIZER")]
    pub no_visualizer: bool,

    /// Directory for log files
    #[arg(long, env = "MUSIC_EXPLORER_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

fn parse_page_size(value: &str) -> Result<u32, String> {
    let size: u32 = value.parse().map_err(|e| format!("{}", e))?;
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZES))
    }
}

fn parse_bars(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("at least one bar is required".to_string()),
        Ok(bars) => Ok(bars),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("music-explorer").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.page_size, 20);
        assert_eq!(args.bars, 64);
        assert_eq!(args.fps, 30);
        assert_eq!(args.timeout(), Duration::from_secs(10));
        assert!(!args.no_visualizer);
        assert_eq!(args.log_dir, PathBuf::from(".logs"));
    }

    #[test]
    fn page_size_restricted_to_known_sizes() {
        assert_eq!(parse(&["--page-size", "50"]).unwrap().page_size, 50);
        assert!(parse(&["--page-size", "25"]).is_err());
        assert!(parse(&["--page-size", "abc"]).is_err());
    }

    #[test]
    fn bars_and_fps_bounds() {
        assert!(parse(&["--bars", "0"]).is_err());
        assert_eq!(parse(&["--bars", "12"]).unwrap().bars, 12);
        assert!(parse(&["--fps", "0"]).is_err());
        assert!(parse(&["--fps", "121"]).is_err());
        let args = parse(&["--fps", "50"]).unwrap();
        assert_eq!(args.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn explicit_api_base() {
        let args = parse(&["--api-base", "http://example.test/api/music/"]).unwrap();
        assert_eq!(args.api_base, "http://example.test/api/music/");
    }
}
