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

//! Pulsing indicator for the current wheel position.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::{render::icons::ICON_INDICATOR, theme::Theme};

/// Brightness of the indicator at `now`, oscillating between 0.3 and
/// roughly 0.63. Holding a scroll input halves the pulse period so the
/// indicator visibly spins up while the wheel is moving.
pub(crate) fn pulse(now: u64, fast: bool) -> f32 {
    let period = if fast { 360.0 } else { 720.0 };
    let t = now as f32 / period;
    0.3 + t.sin().powi(2) / 3.0
}

pub(crate) fn draw_indicator(f: &mut Frame, area: Rect, theme: &Theme, now: u64, fast: bool) {
    let colour = Theme::scale(theme.accent_colour, pulse(now, fast) / 0.63);
    let marker = Paragraph::new(ICON_INDICATOR).style(Style::default().fg(colour));
    f.render_widget(marker, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_within_its_band() {
        for now in (0u64..10_000).step_by(37) {
            let level = pulse(now, false);
            assert!(level >= 0.3);
            assert!(level <= 0.3 + 1.0 / 3.0 + f32::EPSILON);
        }
    }

    #[test]
    fn pulse_bottoms_out_at_zero() {
        assert!((pulse(0, false) - 0.3).abs() < 1e-6);
        assert!((pulse(0, true) - 0.3).abs() < 1e-6);
    }
}
