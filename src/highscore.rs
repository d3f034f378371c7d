//! Persist the high score to disk (XDG config or ~/.config/gridfall).

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

const FILENAME: &str = "highscore";

/// Returns the path to the high score file (config dir / gridfall / highscore).
fn config_path() -> Result<PathBuf> {
    let base = if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if xdg.is_empty() {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".config")
        } else {
            PathBuf::from(xdg)
        }
    } else {
        std::env::var("HOME")
            .map(|h| PathBuf::from(h).join(".config"))
            .unwrap_or_else(|_| PathBuf::from("."))
    };
    Ok(base.join("gridfall").join(FILENAME))
}

/// Load the stored high score. Missing, unreadable, or unparsable all read
/// as 0; gameplay never depends on the file.
pub fn load() -> u32 {
    let path = match config_path() {
        Ok(p) => p,
        Err(_) => return 0,
    };
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Save the high score. Creates the config directory if needed. Callers
/// ignore a failed write; it is not retried.
pub fn save(score: u32) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{score}\n"))?;
    Ok(())
}
