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

//! User interface rendering logic.
//!
//! Translates the [`App`] state into `ratatui` widgets once per tick: help
//! text across the top, the song wheel (or the marked list) in the middle
//! with the pulsing indicator in its gutter, per-player difficulty boxes
//! below, and a one-line status footer.

pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{
    App,
    components::{
        draw_difficulty_box, draw_indicator, draw_marked_list, draw_song_list,
    },
    menu::MenuScreen,
};

/// Renders one frame of the selection screen.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let now = app.now_ms();
    let area = f.area();

    // Outer layout: help, main, difficulty row, status
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    app.help.draw(f, outer[0], &app.theme, now);

    draw_main(f, outer[1], app, now);

    // One difficulty box per configured player.
    let players = (app.config.players.clamp(1, 2)) as usize;
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, players as u32); players])
        .split(outer[2]);
    for slot in 0..players {
        draw_difficulty_box(f, boxes[slot], &app.menu, slot);
    }

    draw_status(f, outer[3], app);
}

fn draw_main(f: &mut Frame, area: Rect, app: &mut App, now: u64) {
    // A two-column gutter keeps the indicator beside the selected row.
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    match app.menu.screen {
        MenuScreen::Wheel => draw_song_list(f, main[1], &app.menu, &app.theme),
        MenuScreen::Marked => draw_marked_list(f, main[1], &app.menu, &app.theme),
    }

    // The selection always occupies the first row inside the list border.
    let marker = Rect {
        x: main[0].x,
        y: main[0].y + 1,
        width: main[0].width,
        height: 1,
    };
    let fast = app.fast_scroll.iter().any(|&held| held);
    draw_indicator(f, marker, &app.theme, now, fast);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let status = format!(
        " sort: {} | marked: {} | {} ",
        app.menu.sort.label(),
        app.menu.marked.len(),
        match app.menu.screen {
            MenuScreen::Wheel => "wheel",
            MenuScreen::Marked => "marked",
        }
    );
    let footer = Paragraph::new(status).style(Style::default().fg(app.theme.status_fg));
    f.render_widget(footer, area);
}
