mod app;
mod cue;
mod frame;
mod prefs;
mod settings;
mod theme;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::Parser;
use dial_engine::device::GpuInit;
use dial_engine::logging::{init_logging, LoggingConfig};
use dial_engine::text::{FontId, FontSystem};
use dial_engine::window::{Runtime, RuntimeConfig};
use dial_face::{ClockSource, FixedClock, LocalClock, TimeSample};
use winit::dpi::LogicalSize;

use crate::app::ClockApp;
use crate::prefs::PreferenceFile;
use crate::settings::status_line;

/// Searched in order when no font is configured.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Analog desktop clock.
///
/// Keys: S sound, 1/2/3 hour/minute/second hand, H hour markers, M minute
/// markers, N numerals, F frame, T theme, Up/Down volume, R reset,
/// Ctrl+S save, Esc quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding preferences.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show a fixed time (HH:MM or HH:MM:SS) instead of the local clock
    #[arg(long, value_parser = parse_time)]
    at: Option<TimeSample>,

    /// Log filter in env_logger syntax, e.g. `debug` or `dial_face=trace`
    #[arg(long)]
    log: Option<String>,

    /// Initial window width and height in logical pixels
    #[arg(long, default_value_t = 480.0)]
    size: f64,

    /// Numeral font, overriding the `font` preference
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let store = PreferenceFile::locate(args.config).context("failed to locate preferences")?;
    let prefs = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;
    log::info!("preferences: {}", store.path().display());

    let mut fonts = FontSystem::new();
    let font = load_font(&mut fonts, args.font.as_deref().or(prefs.font.as_deref()));

    let clock: Box<dyn ClockSource> = match args.at {
        Some(time) => {
            let (h, m, s) = (time.hour12(), time.minute(), time.second());
            log::info!("showing fixed time {h:02}:{m:02}:{s:02}");
            Box::new(FixedClock(time))
        }
        None => Box::new(LocalClock),
    };

    let size = args.size.max(64.0);
    let config = RuntimeConfig {
        title: status_line(&prefs),
        initial_size: LogicalSize::new(size, size),
        ..RuntimeConfig::default()
    };

    let app = ClockApp::new(prefs, store, clock, fonts, font).context("invalid preferences")?;
    Runtime::run(config, GpuInit::default(), app)
}

fn parse_time(s: &str) -> Result<TimeSample, String> {
    let time = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("expected HH:MM or HH:MM:SS: {e}"))?;
    Ok(TimeSample::from_timelike(&time))
}

/// Loads the configured font, or the first system font found.
///
/// Without a font the numerals are skipped.
fn load_font(fonts: &mut FontSystem, configured: Option<&Path>) -> Option<FontId> {
    let candidates = configured
        .into_iter()
        .map(Path::to_path_buf)
        .chain(SYSTEM_FONTS.iter().map(PathBuf::from));

    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        match fonts.load_font(&bytes) {
            Ok(id) => {
                log::debug!("numeral font: {}", path.display());
                return Some(id);
            }
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }

    log::warn!("no usable font found, numerals will not be drawn");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_times() {
        let t = parse_time("18:30:15").unwrap();
        assert_eq!((t.hour12(), t.minute(), t.second()), (6, 30, 15));

        let t = parse_time("03:00").unwrap();
        assert_eq!((t.hour12(), t.minute(), t.second()), (3, 0, 0));
    }

    #[test]
    fn rejects_bad_times() {
        for bad in ["25:00:00", "noon", "12:61", ""] {
            assert!(parse_time(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn unreadable_configured_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        let mut fonts = FontSystem::new();
        let font = load_font(&mut fonts, Some(&bogus));
        assert_eq!(font.is_some(), !fonts.is_empty());
    }

    #[test]
    fn args_parse() {
        let argv = ["dial-studio", "--at", "6:30:00", "--size", "300"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.size, 300.0);
        assert_eq!(args.at.map(|t| t.minute()), Some(30));
        assert!(args.config.is_none());
    }
}
