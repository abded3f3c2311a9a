// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

use crate::config::{read_var, ConfigError};

pub const PALETTE_ENV: &str = "RECAP_TUI_PALETTE";

/// Colours for the deck and open screens.
///
/// Without a palette override the terminal's own 16 ANSI colours are used.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        let Some(raw) = read_var(&lookup, PALETTE_ENV)? else {
            return Ok(Self::default());
        };
        let palette = TuiPalette::parse_csv(&raw)
            .map_err(|error| ConfigError::invalid(PALETTE_ENV, &raw, &error))?;
        Ok(Self { palette: Some(palette) })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn color(&self, ansi: Ansi) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[ansi as usize],
            None => ansi.terminal_color(),
        }
    }

    pub(crate) fn card_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Cyan))
    }

    pub(crate) fn accent_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::BrightGreen)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Cyan)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn label_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::White))
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::BrightBlack))
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::Red))
    }

    pub(crate) fn header_style(&self) -> Style {
        self.base_style().fg(self.color(Ansi::BrightWhite)).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const FIELDS: [&'static str; 18] = [
        "fg",
        "bg",
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "magenta",
        "cyan",
        "white",
        "bright_black",
        "bright_red",
        "bright_green",
        "bright_yellow",
        "bright_blue",
        "bright_magenta",
        "bright_cyan",
        "bright_white",
    ];

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::FIELDS.len() {
            return Err(format!(
                "expected {} comma-separated colors ({}), got {}",
                Self::FIELDS.len(),
                Self::FIELDS.join(","),
                parts.len()
            ));
        }

        let mut colors = [Color::Reset; 18];
        for (idx, part) in parts.iter().enumerate() {
            colors[idx] =
                parse_color(part).map_err(|error| format!("{}: {error}", Self::FIELDS[idx]))?;
        }

        let mut ansi = [Color::Reset; 16];
        ansi.copy_from_slice(&colors[2..]);
        Ok(Self { fg: colors[0], bg: colors[1], ansi })
    }
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` and X11 `rgb:RR/GG/BB` (2 or 4 hex digits per channel).
fn parse_color(value: &str) -> Result<Color, String> {
    if value.is_empty() {
        return Err("empty color".to_owned());
    }

    if let Some(rest) = value.to_ascii_lowercase().strip_prefix("rgb:") {
        let channels = rest.split('/').map(parse_x11_channel).collect::<Result<Vec<_>, _>>()?;
        let [r, g, b] = channels[..] else {
            return Err(format!("invalid rgb: value: {value}"));
        };
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = ["#", "0x", "0X"]
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))
        .unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {value} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {value}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_x11_channel(value: &str) -> Result<u8, String> {
    let invalid = || format!("invalid rgb: component {value} (expected 2 or 4 hex digits)");
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| invalid()),
        4 => u16::from_str_radix(value, 16).map(|wide| (wide >> 8) as u8).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Indices into the 16-colour ANSI table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ansi {
    Red = 1,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightGreen = 10,
    BrightWhite = 15,
}

impl Ansi {
    fn terminal_color(self) -> Color {
        match self {
            Self::Red => Color::Red,
            Self::Cyan => Color::Cyan,
            Self::White => Color::Gray,
            Self::BrightBlack => Color::DarkGray,
            Self::BrightGreen => Color::LightGreen,
            Self::BrightWhite => Color::White,
        }
    }
}
