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

//! Domain models for the song-selection screen.
//!
//! This module defines the entities the screen operates on: songs, their
//! step-chart difficulties, and the ordering modes of the song wheel.

pub(crate) mod catalog;

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub(crate) struct SongInfo {
    pub(crate) id: i32,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) bpm: f32,
    pub(crate) difficulties: Vec<Difficulty>,
}

/// One step chart of a song.
///
/// `grade` is the player's best clear grade, when one is known.
#[derive(Debug, Clone)]
pub(crate) struct Difficulty {
    pub(crate) name: String,
    pub(crate) feet: u8,
    pub(crate) grade: Option<String>,
    pub(crate) colour: Color,
}

/// Ordering of the song wheel, cycled by the sort command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortMode {
    Title,
    Artist,
    Bpm,
}

impl SortMode {
    pub(crate) fn next(self) -> Self {
        match self {
            SortMode::Title => SortMode::Artist,
            SortMode::Artist => SortMode::Bpm,
            SortMode::Bpm => SortMode::Title,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            SortMode::Title => "title",
            SortMode::Artist => "artist",
            SortMode::Bpm => "bpm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_modes_cycle() {
        let mut mode = SortMode::Title;
        mode = mode.next();
        assert_eq!(mode, SortMode::Artist);
        mode = mode.next();
        assert_eq!(mode, SortMode::Bpm);
        mode = mode.next();
        assert_eq!(mode, SortMode::Title);
    }
}
