// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! Alongside the palette this module provides the colour arithmetic the
//! animated widgets lean on: terminals have no per-cell alpha channel, so
//! fades are approximated by interpolating foreground colours toward the
//! background.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) help_fg: Color,
    pub(crate) list_fg: Color,
    pub(crate) list_selected_fg: Color,
    pub(crate) marked_fg: Color,
    pub(crate) status_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 12, 36),
            accent_colour: Color::Rgb(111, 255, 148),
            border_colour: Color::Rgb(88, 104, 255),

            help_fg: Color::Rgb(255, 255, 255),
            list_fg: Color::Rgb(212, 217, 255),
            list_selected_fg: Color::Rgb(255, 255, 255),
            marked_fg: Color::Rgb(255, 215, 0),
            status_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background via escape
    /// sequences.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }

    /// Scales an RGB colour's brightness by `factor`, clamped to the valid
    /// channel range. Non-RGB colours pass through unchanged.
    pub(crate) fn scale(colour: Color, factor: f32) -> Color {
        match colour {
            Color::Rgb(r, g, b) => Color::Rgb(
                scale_channel(r, factor),
                scale_channel(g, factor),
                scale_channel(b, factor),
            ),
            other => other,
        }
    }

    /// Linear interpolation from one RGB colour to another; `p` of zero
    /// gives `from`, one gives `to`. Either colour being non-RGB yields
    /// `to` unchanged.
    pub(crate) fn lerp(from: Color, to: Color, p: f32) -> Color {
        let p = p.clamp(0.0, 1.0);
        match (from, to) {
            (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
                lerp_channel(r0, r1, p),
                lerp_channel(g0, g1, p),
                lerp_channel(b0, b1, p),
            ),
            _ => to,
        }
    }
}

fn scale_channel(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).clamp(0.0, 255.0) as u8
}

fn lerp_channel(from: u8, to: u8, p: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * p).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_endpoints() {
        let from = Color::Rgb(0, 100, 200);
        let to = Color::Rgb(255, 0, 50);
        assert_eq!(Theme::lerp(from, to, 0.0), from);
        assert_eq!(Theme::lerp(from, to, 1.0), to);
    }

    #[test]
    fn lerp_clamps_out_of_range_progress() {
        let from = Color::Rgb(10, 10, 10);
        let to = Color::Rgb(20, 20, 20);
        assert_eq!(Theme::lerp(from, to, -1.0), from);
        assert_eq!(Theme::lerp(from, to, 2.0), to);
    }

    #[test]
    fn scale_clamps_at_full_brightness() {
        assert_eq!(Theme::scale(Color::Rgb(200, 200, 200), 2.0), Color::Rgb(255, 255, 255));
        assert_eq!(Theme::scale(Color::Rgb(100, 50, 0), 0.5), Color::Rgb(50, 25, 0));
    }

    #[test]
    fn to_hex_formats_rgb() {
        assert_eq!(Theme::to_hex(Color::Rgb(18, 12, 36)), "#120c24");
    }
}
