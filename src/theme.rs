//! Theme loading: btop-style `theme[key]="value"` and hex → ratatui Color.

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Piece and UI colours. Piece colours are indexed by grid tag 1..=7
/// (T, O, L, J, I, S, Z).
#[derive(Debug, Clone)]
pub struct Theme {
    /// Piece colours for tags 1..=7: red, yellow, magenta, blue, cyan,
    /// green, orange.
    pub piece: [Color; 7],
    /// Playfield background.
    pub bg: Color,
    /// Grid / border.
    pub div_line: Color,
    /// Text (score, timer).
    pub main_fg: Color,
    /// Highlight / titles.
    pub title: Color,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl Default for Theme {
    fn default() -> Self {
        Self::onedark_default()
    }
}

impl Theme {
    /// One Dark variants of the classic palette, in tag order.
    pub fn onedark_default() -> Self {
        Self {
            piece: [
                parse_hex("#E06C75").unwrap(), // T / red
                parse_hex("#E5C07B").unwrap(), // O / yellow
                parse_hex("#C678DD").unwrap(), // L / magenta
                parse_hex("#61AFEF").unwrap(), // J / blue
                parse_hex("#56B6C2").unwrap(), // I / cyan
                parse_hex("#98C379").unwrap(), // S / green
                parse_hex("#D19A66").unwrap(), // Z / orange
            ],
            bg: parse_hex("#31353F").unwrap(),
            div_line: parse_hex("#3F444F").unwrap(),
            main_fg: parse_hex("#ABB2BF").unwrap(),
            title: parse_hex("#E5C07B").unwrap(),
        }
    }

    /// Load theme from a btop-style file: `theme[key]="value"` or
    /// `theme[key]='value'`. Falls back to defaults if path is None or the
    /// file is missing/invalid. `palette` selects the colour variant.
    pub fn load(path: Option<&Path>, palette: crate::Palette) -> Result<Self, ThemeError> {
        let path = match path {
            Some(p) if p.exists() => p,
            _ => return Ok(Self::default_for_palette(palette)),
        };
        let s = std::fs::read_to_string(path)?;
        let map = parse_theme_file(&s);
        let mut theme = Self::from_map(&map);
        theme.apply_palette(palette);
        Ok(theme)
    }

    fn default_for_palette(palette: crate::Palette) -> Self {
        let mut t = Self::onedark_default();
        t.apply_palette(palette);
        t
    }

    /// Override piece colours for high-contrast or colorblind display.
    pub fn apply_palette(&mut self, palette: crate::Palette) {
        match palette {
            crate::Palette::Normal => {}
            crate::Palette::HighContrast => {
                self.piece = [
                    parse_hex("#FF0000").unwrap(), // red
                    parse_hex("#FFFF00").unwrap(), // yellow
                    parse_hex("#FF00FF").unwrap(), // magenta
                    parse_hex("#0088FF").unwrap(), // blue
                    parse_hex("#00FFFF").unwrap(), // cyan
                    parse_hex("#00FF00").unwrap(), // green
                    parse_hex("#FF8800").unwrap(), // orange
                ];
            }
            crate::Palette::Colorblind => {
                // Avoid red/green pairs; keep the seven tags distinguishable.
                self.piece = [
                    parse_hex("#CC3311").unwrap(),
                    parse_hex("#BBBB00").unwrap(),
                    parse_hex("#EE3377").unwrap(),
                    parse_hex("#0077BB").unwrap(),
                    parse_hex("#33BBEE").unwrap(),
                    parse_hex("#009988").unwrap(),
                    parse_hex("#EE7733").unwrap(),
                ];
            }
        }
    }

    fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .and_then(|v| parse_hex(v.trim_matches('"').trim_matches('\'').trim()).ok())
        };
        // Keys follow btop theme naming; fallbacks are the One Dark values.
        Self {
            piece: [
                get("cpu_end").unwrap_or_else(|| parse_hex("#E06C75").unwrap()),
                get("cpu_mid").unwrap_or_else(|| parse_hex("#E5C07B").unwrap()),
                get("net_box").unwrap_or_else(|| parse_hex("#C678DD").unwrap()),
                get("cpu_box").unwrap_or_else(|| parse_hex("#61AFEF").unwrap()),
                get("hi_fg").unwrap_or_else(|| parse_hex("#56B6C2").unwrap()),
                get("mem_box").unwrap_or_else(|| parse_hex("#98C379").unwrap()),
                get("temp_mid").unwrap_or_else(|| parse_hex("#D19A66").unwrap()),
            ],
            bg: get("meter_bg").unwrap_or_else(|| parse_hex("#31353F").unwrap()),
            div_line: get("div_line").unwrap_or_else(|| parse_hex("#3F444F").unwrap()),
            main_fg: get("main_fg").unwrap_or_else(|| parse_hex("#ABB2BF").unwrap()),
            title: get("title").unwrap_or_else(|| parse_hex("#E5C07B").unwrap()),
        }
    }

    /// Colour for a grid tag (1..=7). Zero is not a piece; callers only ask
    /// for occupied cells, but an out-of-palette tag falls back to bg.
    #[inline]
    pub fn piece_color(&self, tag: u8) -> Color {
        match tag {
            1..=7 => self.piece[tag as usize - 1],
            _ => self.bg,
        }
    }
}

/// Parse btop-style theme file into key -> value map.
fn parse_theme_file(s: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(stripped) = line.strip_prefix("theme[") {
            if let Some(end) = stripped.find(']') {
                let key = stripped[..end].trim();
                let rest = stripped[end + 1..].trim();
                if let Some(eq) = rest.find('=') {
                    let value = rest[eq + 1..]
                        .trim()
                        .trim_matches('"')
                        .trim_matches('\'')
                        .to_string();
                    if !value.is_empty() {
                        map.insert(key.to_string(), value);
                    }
                }
            }
        }
    }
    map
}

/// Parse hex colour "#RRGGBB" or "#RGB" into ratatui Color.
pub fn parse_hex(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim().trim_start_matches('#');
    let (r, g, b) = if s.len() == 6 {
        let r =
            u8::from_str_radix(&s[0..2], 16).map_err(|_| ThemeError::InvalidHex(s.to_string()))?;
        let g =
            u8::from_str_radix(&s[2..4], 16).map_err(|_| ThemeError::InvalidHex(s.to_string()))?;
        let b =
            u8::from_str_radix(&s[4..6], 16).map_err(|_| ThemeError::InvalidHex(s.to_string()))?;
        (r, g, b)
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16)
            .map_err(|_| ThemeError::InvalidHex(s.to_string()))?
            * 17;
        let g = u8::from_str_radix(&s[1..2], 16)
            .map_err(|_| ThemeError::InvalidHex(s.to_string()))?
            * 17;
        let b = u8::from_str_radix(&s[2..3], 16)
            .map_err(|_| ThemeError::InvalidHex(s.to_string()))?
            * 17;
        (r, g, b)
    } else {
        return Err(ThemeError::InvalidHex(s.to_string()));
    };
    Ok(Color::Rgb(r, g, b))
}
