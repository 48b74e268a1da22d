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

//! Crossfading help text along the top of the screen.
//!
//! Each string is shown long enough to read (proportional to its length),
//! then crossfades into the next over three quarters of a second. The fade
//! is approximated by dimming the outgoing string toward the background for
//! the first half of the window and brightening the incoming one for the
//! second half.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::theme::Theme;

/// Reading time granted per character of the current string.
const SHOW_MS_PER_CHAR: u64 = 100;

/// Length of the crossfade window.
const FADE_MS: u64 = 750;

pub(crate) struct HelpText {
    strings: Vec<String>,
    idx: usize,
    fade_at: u64,
    end_at: u64,
}

impl HelpText {
    pub(crate) fn new(strings: Vec<String>) -> Self {
        let mut help = Self {
            strings,
            idx: 0,
            fade_at: 0,
            end_at: 0,
        };
        help.rearm(0);
        help
    }

    /// Advances to the next string once the current one's display window
    /// has fully elapsed.
    pub(crate) fn update(&mut self, now: u64) {
        if self.strings.is_empty() {
            return;
        }
        if now > self.end_at {
            self.idx = (self.idx + 1) % self.strings.len();
            self.rearm(now);
        }
    }

    fn rearm(&mut self, now: u64) {
        let shown = self.strings.get(self.idx).map_or(0, |s| s.chars().count());
        self.fade_at = now + SHOW_MS_PER_CHAR * shown as u64;
        self.end_at = self.fade_at + FADE_MS;
    }

    /// The string to show at `now` and its alpha, zero meaning fully faded
    /// into the background.
    pub(crate) fn line(&self, now: u64) -> (&str, f32) {
        if self.strings.is_empty() {
            return ("", 0.0);
        }
        let current = self.strings[self.idx].as_str();
        if now <= self.fade_at {
            return (current, 1.0);
        }

        let p = ((now - self.fade_at) as f32 / FADE_MS as f32).clamp(0.0, 1.0);
        if p < 0.5 {
            (current, 1.0 - 2.0 * p)
        } else {
            let next = self.strings[(self.idx + 1) % self.strings.len()].as_str();
            (next, 2.0 * p - 1.0)
        }
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, now: u64) {
        let (text, alpha) = self.line(now);
        let colour = Theme::lerp(theme.background_colour, theme.help_fg, alpha);
        let help = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colour));
        f.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help() -> HelpText {
        HelpText::new(vec!["ab".to_string(), "c".to_string()])
    }

    #[test]
    fn first_string_shows_solid_until_its_fade_starts() {
        let help = help();
        // "ab" earns 200ms of reading time.
        assert_eq!(help.line(0), ("ab", 1.0));
        assert_eq!(help.line(200), ("ab", 1.0));
    }

    #[test]
    fn crossfade_hands_over_at_the_halfway_point() {
        let help = help();
        let (text, alpha) = help.line(200 + 375);
        assert_eq!(text, "c");
        assert!(alpha.abs() < 0.01);

        let (text, alpha) = help.line(200 + 740);
        assert_eq!(text, "c");
        assert!(alpha > 0.9);
    }

    #[test]
    fn update_advances_and_wraps_the_index() {
        let mut help = help();
        // Past fade (200) + 750.
        help.update(1000);
        assert_eq!(help.line(1000), ("c", 1.0));

        // "c" earns 100ms then fades over 750.
        help.update(1000 + 851);
        assert_eq!(help.line(1000 + 851), ("ab", 1.0));
    }

    #[test]
    fn empty_string_set_is_inert() {
        let mut help = HelpText::new(vec![]);
        help.update(10_000);
        assert_eq!(help.line(10_000), ("", 0.0));
    }
}
