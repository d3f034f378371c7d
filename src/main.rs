//! Gridfall — classic falling-block puzzle game in the terminal.

mod app;
mod game;
mod highscore;
mod input;
mod theme;
mod ui;

use anyhow::Result;
use app::App;
use clap::{Parser, ValueEnum};

fn main() -> Result<()> {
    let args = Args::parse();
    let theme = theme::Theme::load(args.theme.as_deref(), args.palette).unwrap_or_default();
    let mut app = App::new(&args, theme);
    app.run()?;
    Ok(())
}

/// Classic falling-block puzzle game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "gridfall",
    version,
    about = "Classic falling-block puzzle in the terminal. Stack the pieces; clear full rows to score.",
    long_about = "Gridfall is a terminal rendition of the classic falling-block puzzle.\n\n\
        Pieces fall one row per second. Move and rotate them so they lock into full \
        horizontal rows; each cleared row scores, and clearing several in one drop \
        doubles the reward per row. The best score is kept across sessions.\n\n\
        CONTROLS (normal):\n  Left/Right  Move    Up   Rotate    Down  Soft drop\n  S/Enter     Start   P    Pause     R     Reset   Q / Esc  Quit\n\n\
        CONTROLS (vim):\n  h/l         Move    k    Rotate    j     Soft drop\n\n\
        Use --theme to load a btop-style theme (e.g. onedark.theme)."
)]
pub struct Args {
    /// Playfield width in columns (grid cells).
    #[arg(long, default_value = "15", value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Playfield height in rows (grid cells).
    #[arg(long, default_value = "30", value_name = "ROWS", value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Gravity drop interval in milliseconds.
    #[arg(long, default_value_t = game::DROP_INTERVAL_MS, value_name = "MS")]
    pub drop_interval_ms: u64,

    /// Path to theme file (btop-style theme[key]="value"). Uses One Dark if not set.
    #[arg(short, long, value_name = "FILE")]
    pub theme: Option<std::path::PathBuf>,

    /// Colour palette: normal (theme), high-contrast, or colorblind.
    #[arg(long, default_value = "normal")]
    pub palette: Palette,

    /// Skip the start screen and begin playing immediately.
    #[arg(long)]
    pub no_splash: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Normal,

    #[value(alias = "highcontrast", alias = "contrast")]
    HighContrast,

    #[value(alias = "colourblind")]
    Colorblind,
}
