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

//! Time-driven widgets of the selection screen.
//!
//! Each widget recomputes its visual representation from the elapsed
//! milliseconds since the screen came up and the current selection state;
//! none of them own a clock or a thread.

mod difficulty;
mod help_text;
mod indicator;
mod song_list;

pub(crate) use difficulty::draw_difficulty_box;
pub(crate) use help_text::HelpText;
pub(crate) use indicator::draw_indicator;
pub(crate) use song_list::{draw_marked_list, draw_song_list};
