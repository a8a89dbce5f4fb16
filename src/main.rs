#![allow(non_snake_case)]

mod app;
mod sections;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// DAIN - AI transformation portfolio
#[derive(Parser, Debug)]
#[command(name = "dain-site")]
#[command(about = "DAIN portfolio - single-page site in a desktop window")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280, value_parser = clap::value_parser!(u32).range(320..=7680))]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860, value_parser = clap::value_parser!(u32).range(480..=4320))]
    height: u32,

    /// Window title
    #[arg(long, default_value = "DAIN.AI")]
    title: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    tracing::info!(width = args.width, height = args.height, "Starting '{}'", args.title);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                f64::from(args.width),
                f64::from(args.height),
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["dain-site"]).unwrap();
        assert_eq!(args.width, 1280);
        assert_eq!(args.height, 860);
        assert_eq!(args.title, "DAIN.AI");
    }

    #[test]
    fn rejects_tiny_windows() {
        assert!(Args::try_parse_from(["dain-site", "--width", "100"]).is_err());
        assert!(Args::try_parse_from(["dain-site", "--height", "10"]).is_err());
    }

    #[test]
    fn narrow_window_is_allowed() {
        let args = Args::try_parse_from(["dain-site", "--width", "375", "--height", "812"]).unwrap();
        assert_eq!((args.width, args.height), (375, 812));
    }
}
