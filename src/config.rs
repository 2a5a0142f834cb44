//! Command line configuration.
//!
//! Every flag defaults to the fixed startup behaviour, so running without
//! arguments opens the plain "Circle" window.

use clap::Parser;
use thiserror::Error;

use crate::colors::{Colors, Rgba};
use crate::resources::{Palette, DEFAULT_RETRY_LIMIT};

pub const DEFAULT_TITLE: &str = "Circle";

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about = "Drag the mouse to draw an ellipse", long_about = None)]
pub struct Args {
    /// Window title
    #[clap(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Initial window width in pixels (requires --height)
    #[clap(long)]
    pub width: Option<i32>,

    /// Initial window height in pixels (requires --width)
    #[clap(long)]
    pub height: Option<i32>,

    /// Background colour as #RRGGBB or #RRGGBBAA
    #[clap(long, default_value = "#87CEEB")]
    pub background: Rgba,

    /// Ellipse colour as #RRGGBB or #RRGGBBAA
    #[clap(long, default_value = "#FF00FF")]
    pub fill: Rgba,

    /// Report radii as absolute values when dragging up or left
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub normalize_radii: bool,

    /// Failed frames in a row before rendering is reported as degraded
    #[clap(long, default_value_t = DEFAULT_RETRY_LIMIT)]
    pub retry_limit: u32,

    /// Enable debug logging (RUST_LOG is honoured when set)
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub debug: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--width and --height must be given together")]
    PartialSize,

    #[error("window size must be positive, got {0}x{1}")]
    InvalidSize(i32, i32),

    #[error("--retry-limit must be at least 1")]
    ZeroRetryLimit,
}

/// Validated startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    /// `None` lets the window system choose
    pub initial_size: Option<(i32, i32)>,
    pub palette: Palette,
    pub normalize_radii: bool,
    pub retry_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            initial_size: None,
            palette: Palette {
                background: Colors::BACKGROUND,
                fill: Colors::FILL,
            },
            normalize_radii: false,
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let initial_size = match (args.width, args.height) {
            (None, None) => None,
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            (Some(w), Some(h)) => return Err(ConfigError::InvalidSize(w, h)),
            _ => return Err(ConfigError::PartialSize),
        };
        if args.retry_limit == 0 {
            return Err(ConfigError::ZeroRetryLimit);
        }

        Ok(Config {
            title: args.title,
            initial_size,
            palette: Palette {
                background: args.background,
                fill: args.fill,
            },
            normalize_radii: args.normalize_radii,
            retry_limit: args.retry_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("circle").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Config::try_from(args)
    }

    #[test]
    fn test_no_arguments_is_default() {
        assert_eq!(parse(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "--title", "Ovals", "--width", "640", "--height", "480",
            "--fill", "#00FF00", "--normalize-radii", "--retry-limit", "5",
        ])
        .unwrap();
        assert_eq!(config.title, "Ovals");
        assert_eq!(config.initial_size, Some((640, 480)));
        assert_eq!(config.palette.fill, Rgba::opaque(0.0, 1.0, 0.0));
        assert_eq!(config.palette.background, Colors::BACKGROUND);
        assert!(config.normalize_radii);
        assert_eq!(config.retry_limit, 5);
    }

    #[test]
    fn test_size_validation() {
        assert_eq!(parse(&["--width", "640"]), Err(ConfigError::PartialSize));
        assert_eq!(
            parse(&["--width", "0", "--height", "10"]),
            Err(ConfigError::InvalidSize(0, 10))
        );
        assert_eq!(parse(&["--retry-limit", "0"]), Err(ConfigError::ZeroRetryLimit));
    }

    #[test]
    fn test_bad_colour_rejected_by_parser() {
        let result = Args::try_parse_from(["circle", "--background", "blue"]);
        assert!(result.is_err());
    }
}
