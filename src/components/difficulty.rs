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

//! Per-player difficulty boxes along the bottom of the screen.
//!
//! Each box shows the player's current chart for the selected song: the
//! difficulty name in its chart colour, the foot rating, and the best
//! clear grade when one is on record.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::menu::MenuState;

pub(crate) fn draw_difficulty_box(f: &mut Frame, area: Rect, menu: &MenuState, slot: usize) {
    let Some(song) = menu.current() else {
        return;
    };
    if song.difficulties.is_empty() {
        return;
    }

    let diff = &song.difficulties[menu.difficulty[slot] % song.difficulties.len()];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(diff.colour))
        .title(format!(" Player {} ", slot + 1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let name = Line::styled(
        diff.name.clone(),
        Style::default().fg(diff.colour).add_modifier(Modifier::BOLD),
    );
    let rating = Line::raw(format!(
        "x{} - {}",
        diff.feet,
        diff.grade.as_deref().unwrap_or("--")
    ));

    let body = Paragraph::new(vec![name, rating]).alignment(Alignment::Center);
    f.render_widget(body, inner);
}
